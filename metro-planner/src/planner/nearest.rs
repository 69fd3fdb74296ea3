//! Snapping arbitrary coordinates to stations.

use crate::domain::{Point, StationId};
use crate::network::Network;

/// All stations ordered by straight-line distance from `point`.
///
/// Ties at equal distance are broken by ascending station id, so the
/// order is fully deterministic.
pub fn stations_by_distance(point: Point, network: &Network) -> Vec<(StationId, f64)> {
    let mut stations: Vec<(StationId, f64)> = network
        .stations()
        .map(|(id, station)| (id, point.distance_to(&station.position)))
        .collect();

    stations.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    stations
}

/// The station closest to `point` and its distance, `None` for an empty network.
pub fn nearest_station(point: Point, network: &Network) -> Option<(StationId, f64)> {
    network
        .stations()
        .map(|(id, station)| (id, point.distance_to(&station.position)))
        .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
}
