//! Heuristic models: lower-bound estimates of the remaining cost.
//!
//! Each estimate pairs with the cost model of the same preference and
//! never exceeds the true remaining cost, so A* stays optimal.

use crate::domain::{Preference, StationId};
use crate::network::Network;

use super::path::Path;

/// Estimate the cost from `at` to `destination` under `preference`.
///
/// - hops: 0 at or next to the destination, else 1
/// - time: straight-line distance divided by the fastest line speed
/// - distance: straight-line distance
/// - transfers: 0 if already on the destination's line, else 1
pub fn estimate(
    network: &Network,
    preference: Preference,
    at: StationId,
    destination: StationId,
) -> f64 {
    let max_speed = network.max_line_speed();
    estimate_with_speed(network, preference, at, destination, max_speed)
}

fn estimate_with_speed(
    network: &Network,
    preference: Preference,
    at: StationId,
    destination: StationId,
    max_speed: Option<f64>,
) -> f64 {
    match preference {
        Preference::ByHops => {
            if at == destination || network.is_adjacent(at, destination) {
                0.0
            } else {
                1.0
            }
        }
        Preference::ByTime => match (straight_line(network, at, destination), max_speed) {
            (Some(distance), Some(speed)) => distance / speed,
            _ => 0.0,
        },
        Preference::ByDistance => straight_line(network, at, destination).unwrap_or(0.0),
        Preference::ByTransfers => match (network.station(at), network.station(destination)) {
            (Some(here), Some(goal)) if here.line != goal.line => 1.0,
            _ => 0.0,
        },
    }
}

fn straight_line(network: &Network, from: StationId, to: StationId) -> Option<f64> {
    let from = network.station(from)?;
    let to = network.station(to)?;
    Some(from.position.distance_to(&to.position))
}

/// Overwrite each path's `h` with the estimate from its last station.
pub fn score_heuristic(
    paths: &mut [Path],
    network: &Network,
    destination: StationId,
    preference: Preference,
) {
    let max_speed = network.max_line_speed();
    for path in paths {
        let h = estimate_with_speed(network, preference, path.last(), destination, max_speed);
        path.set_estimate(h);
    }
}
