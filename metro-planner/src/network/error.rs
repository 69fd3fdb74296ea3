//! Network construction and loading errors.

use crate::domain::{LineId, StationId};

/// Errors that can occur when building or loading a [`Network`](super::Network).
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading the network file failed
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The network file is not valid JSON for the expected layout
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stations share an id
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// A connection refers to a station that does not exist
    #[error("connection {from} -> {to} refers to unknown station {endpoint}")]
    UnknownEndpoint {
        from: StationId,
        to: StationId,
        endpoint: StationId,
    },

    /// Connection weights must be finite and non-negative
    #[error("connection {from} -> {to} has invalid travel time {weight}")]
    InvalidWeight {
        from: StationId,
        to: StationId,
        weight: f64,
    },

    /// Line speeds must be finite and positive
    #[error("line {line} has invalid speed {speed}")]
    InvalidSpeed { line: LineId, speed: f64 },

    /// Station coordinates must be finite
    #[error("station {station} has invalid position ({x}, {y})")]
    InvalidPosition { station: StationId, x: f64, y: f64 },

    /// A station's line has no speed entry
    #[error("station {station} is on line {line}, which has no speed")]
    MissingLineSpeed { station: StationId, line: LineId },
}
