//! Domain types for the route planner.
//!
//! Stations, lines, coordinates and the routing preference. These are
//! plain values; the graph that ties them together lives in `network`.

mod point;
mod preference;
mod station;

pub use point::Point;
pub use preference::{InvalidPreference, Preference};
pub use station::{LineId, Station, StationId};
