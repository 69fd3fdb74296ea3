//! Read-only transit network graph.
//!
//! A [`Network`] holds the station table, the weighted connections
//! between stations and the speed of every line. It is built once, by
//! [`NetworkBuilder`] or from a JSON file, and never mutated afterwards,
//! so it can be shared freely between searches.

mod error;
mod file;

use std::collections::BTreeMap;

pub use error::NetworkError;
pub use file::{ConnectionRecord, LineSpeedRecord, NetworkFile, StationRecord};

use crate::domain::{LineId, Point, Station, StationId};

/// Stations, connections and line speeds of a transit network.
///
/// Ordered maps keep neighbour iteration in ascending station id, which
/// makes every search deterministic.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: BTreeMap<StationId, Station>,
    /// Map from station to (neighbour -> travel time).
    connections: BTreeMap<StationId, BTreeMap<StationId, f64>>,
    line_speeds: BTreeMap<LineId, f64>,
}

impl Network {
    /// Start building a network.
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// Get a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Check if the network knows a station.
    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    /// Iterate all stations in ascending id order.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &Station)> {
        self.stations.iter().map(|(id, station)| (*id, station))
    }

    /// Iterate the neighbours of a station with their travel times.
    ///
    /// Empty for stations with no outgoing connection or unknown ids.
    pub fn neighbors(&self, id: StationId) -> impl Iterator<Item = (StationId, f64)> + '_ {
        self.connections
            .get(&id)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, weight)| (*to, *weight)))
    }

    /// Travel time of the direct connection `from -> to`, if any.
    pub fn weight(&self, from: StationId, to: StationId) -> Option<f64> {
        self.connections.get(&from)?.get(&to).copied()
    }

    /// Check if `to` is directly reachable from `from`.
    pub fn is_adjacent(&self, from: StationId, to: StationId) -> bool {
        self.weight(from, to).is_some()
    }

    /// Speed of a line.
    pub fn line_speed(&self, line: LineId) -> Option<f64> {
        self.line_speeds.get(&line).copied()
    }

    /// Fastest line speed in the network, `None` if no line is known.
    pub fn max_line_speed(&self) -> Option<f64> {
        self.line_speeds.values().copied().reduce(f64::max)
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Builder for [`Network`].
///
/// Collects everything first and validates on [`build`](Self::build), so
/// stations and connections can be added in any order.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: Vec<(StationId, Station)>,
    connections: Vec<(StationId, StationId, f64)>,
    line_speeds: Vec<(LineId, f64)>,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, id: u32, name: &str, line: u32, x: f64, y: f64) -> Self {
        self.stations.push((
            StationId(id),
            Station::new(name, LineId(line), Point::new(x, y)),
        ));
        self
    }

    /// Set the speed of a line. A later call for the same line wins.
    pub fn line_speed(mut self, line: u32, speed: f64) -> Self {
        self.line_speeds.push((LineId(line), speed));
        self
    }

    /// Add a connection in both directions with the same travel time.
    pub fn connect(self, a: u32, b: u32, time: f64) -> Self {
        self.connect_one_way(a, b, time).connect_one_way(b, a, time)
    }

    /// Add a connection from `from` to `to` only.
    pub fn connect_one_way(mut self, from: u32, to: u32, time: f64) -> Self {
        self.connections.push((StationId(from), StationId(to), time));
        self
    }

    /// Validate and build the network.
    pub fn build(self) -> Result<Network, NetworkError> {
        let mut network = Network::default();

        for (line, speed) in self.line_speeds {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(NetworkError::InvalidSpeed { line, speed });
            }
            network.line_speeds.insert(line, speed);
        }

        for (id, station) in self.stations {
            if !station.position.is_finite() {
                return Err(NetworkError::InvalidPosition {
                    station: id,
                    x: station.position.x,
                    y: station.position.y,
                });
            }
            if !network.line_speeds.contains_key(&station.line) {
                return Err(NetworkError::MissingLineSpeed {
                    station: id,
                    line: station.line,
                });
            }
            if network.stations.insert(id, station).is_some() {
                return Err(NetworkError::DuplicateStation(id));
            }
        }

        for (from, to, weight) in self.connections {
            for endpoint in [from, to] {
                if !network.stations.contains_key(&endpoint) {
                    return Err(NetworkError::UnknownEndpoint { from, to, endpoint });
                }
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(NetworkError::InvalidWeight { from, to, weight });
            }
            network
                .connections
                .entry(from)
                .or_default()
                .insert(to, weight);
        }

        Ok(network)
    }
}
