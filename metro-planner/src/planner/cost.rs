//! Cost models: what a single step adds to a path's `g`.

use crate::domain::{Preference, StationId};
use crate::network::Network;

use super::path::Path;

/// Cost of travelling the connection `from -> to` under `preference`.
///
/// - hops: 1 per edge
/// - time: the connection's travel time
/// - distance: travel time multiplied by the speed of `from`'s line, or
///   0 when both stations share a name (a change of platform, not a move)
/// - transfers: 1 if the stations are on different lines, else 0
///
/// Unknown stations or connections contribute nothing.
pub fn step_cost(network: &Network, preference: Preference, from: StationId, to: StationId) -> f64 {
    match preference {
        Preference::ByHops => 1.0,
        Preference::ByTime => network.weight(from, to).unwrap_or(0.0),
        Preference::ByDistance => {
            let (Some(a), Some(b)) = (network.station(from), network.station(to)) else {
                return 0.0;
            };
            if a.same_site(b) {
                return 0.0;
            }
            let time = network.weight(from, to).unwrap_or(0.0);
            let speed = network.line_speed(a.line).unwrap_or(0.0);
            time * speed
        }
        Preference::ByTransfers => match (network.station(from), network.station(to)) {
            (Some(a), Some(b)) if a.line != b.line => 1.0,
            _ => 0.0,
        },
    }
}

/// Add the cost of each path's final step to its inherited `g`.
///
/// Single-station paths have no final step and are left untouched.
pub fn score_cost(paths: &mut [Path], network: &Network, preference: Preference) {
    for path in paths {
        let Some(from) = path.penultimate() else {
            continue;
        };
        let increment = step_cost(network, preference, from, path.last());
        path.add_cost(increment);
    }
}
