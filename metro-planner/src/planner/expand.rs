//! Successor generation and cycle rejection.

use crate::network::Network;

use super::path::Path;

/// Extend `path` by every neighbour of its last station.
///
/// Children keep the parent's costs; scoring happens later in the same
/// iteration. Returns an empty vector for a dead end.
pub fn expand(path: &Path, network: &Network) -> Vec<Path> {
    network
        .neighbors(path.last())
        .map(|(next, _)| path.extended(next))
        .collect()
}

/// Keep only paths that visit no station twice, preserving order.
pub fn remove_cycles(paths: Vec<Path>) -> Vec<Path> {
    paths.into_iter().filter(|path| !path.has_cycle()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn triangle() -> Network {
        Network::builder()
            .line_speed(1, 1.0)
            .station(1, "A", 1, 0.0, 0.0)
            .station(2, "B", 1, 1.0, 0.0)
            .station(3, "C", 1, 0.0, 1.0)
            .station(4, "D", 1, 5.0, 5.0)
            .connect(1, 2, 1.0)
            .connect(2, 3, 1.0)
            .connect(3, 1, 1.0)
            .build()
            .unwrap()
    }

    fn routes(paths: &[Path]) -> Vec<Vec<u32>> {
        paths
            .iter()
            .map(|p| p.route().iter().map(|id| id.0).collect())
            .collect()
    }

    #[test]
    fn expand_appends_each_neighbor() {
        let network = triangle();
        let path = Path::new(StationId(1)).extended(StationId(2));

        let children = expand(&path, &network);

        assert_eq!(routes(&children), vec![vec![1, 2, 1], vec![1, 2, 3]]);
        assert_eq!(routes(std::slice::from_ref(&path)), vec![vec![1, 2]]);
    }

    #[test]
    fn expand_inherits_costs() {
        let network = triangle();
        let mut path = Path::new(StationId(1));
        path.add_cost(3.0);
        path.set_estimate(2.0);

        for child in expand(&path, &network) {
            assert_eq!(child.g(), 3.0);
            assert_eq!(child.h(), 2.0);
        }
    }

    #[test]
    fn expand_dead_end_is_empty() {
        let network = triangle();
        assert!(expand(&Path::new(StationId(4)), &network).is_empty());
    }

    #[test]
    fn remove_cycles_keeps_order() {
        let network = triangle();
        let path = Path::new(StationId(1)).extended(StationId(2));

        let children = remove_cycles(expand(&path, &network));

        assert_eq!(routes(&children), vec![vec![1, 2, 3]]);
    }
}
