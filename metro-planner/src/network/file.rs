//! JSON network files.
//!
//! The on-disk layout is a single object with three arrays:
//!
//! ```json
//! {
//!   "stations": [{ "id": 1, "name": "Perrache", "line": 1, "x": 0.0, "y": 0.0 }],
//!   "connections": [{ "from": 1, "to": 2, "time": 2.5 }],
//!   "line_speeds": [{ "line": 1, "speed": 30.0 }]
//! }
//! ```
//!
//! Connections are symmetric unless `"one_way": true` is set.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Network, NetworkBuilder, NetworkError};
use crate::domain::{LineId, StationId};

/// A station entry in a network file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: StationId,
    pub name: String,
    pub line: LineId,
    pub x: f64,
    pub y: f64,
}

/// A connection entry in a network file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub from: StationId,
    pub to: StationId,
    /// Travel time between the two stations.
    pub time: f64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub one_way: bool,
}

/// A line speed entry in a network file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSpeedRecord {
    pub line: LineId,
    pub speed: f64,
}

/// Serialized form of a [`Network`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkFile {
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
    #[serde(default)]
    pub line_speeds: Vec<LineSpeedRecord>,
}

impl NetworkFile {
    /// Validate the records and build a [`Network`].
    pub fn into_network(self) -> Result<Network, NetworkError> {
        let mut builder = NetworkBuilder::new();

        for record in &self.line_speeds {
            builder = builder.line_speed(record.line.0, record.speed);
        }
        for record in &self.stations {
            builder = builder.station(record.id.0, &record.name, record.line.0, record.x, record.y);
        }
        for record in &self.connections {
            builder = if record.one_way {
                builder.connect_one_way(record.from.0, record.to.0, record.time)
            } else {
                builder.connect(record.from.0, record.to.0, record.time)
            };
        }

        builder.build()
    }
}

impl Network {
    /// Parse a network from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Network, NetworkError> {
        let file: NetworkFile = serde_json::from_str(json)?;
        file.into_network()
    }

    /// Load a network from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Network, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let network = Self::from_json_str(&contents)?;

        debug!(
            path = %path.display(),
            stations = network.len(),
            "Loaded network"
        );

        Ok(network)
    }
}
