//! Station and line identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point;

/// Identifier of a station in a [`Network`](crate::network::Network).
///
/// Opaque key; the numeric value carries no meaning beyond ordering,
/// which is used to break ties deterministically.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Identifier of a line (a group of stations served by the same vehicles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u32);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A station on a single line.
///
/// Interchanges are modelled as several stations sharing a name, one per
/// line, connected to each other by transfer edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Display name, shared by all platforms of an interchange.
    pub name: String,
    /// Line this station belongs to.
    pub line: LineId,
    /// Planar position.
    pub position: Point,
}

impl Station {
    /// Create a new station.
    pub fn new(name: impl Into<String>, line: LineId, position: Point) -> Self {
        Self {
            name: name.into(),
            line,
            position,
        }
    }

    /// True if both stations are platforms of the same site.
    pub fn same_site(&self, other: &Station) -> bool {
        self.name == other.name
    }
}
