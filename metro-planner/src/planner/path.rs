//! Candidate routes and their accumulated costs.

use std::collections::HashSet;

use crate::domain::StationId;

/// A route under construction, from the search origin to [`last`](Self::last).
///
/// Each path owns its route buffer. Extending a path copies the prefix,
/// so sibling branches never observe each other's changes.
///
/// `g` is the cost accumulated so far under the active preference, `h`
/// the latest estimate of the remaining cost and `f = g + h` the A*
/// priority. Paths that are never scored keep `g = h = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Never empty.
    route: Vec<StationId>,
    g: f64,
    h: f64,
}

impl Path {
    /// A single-station path at the search origin.
    pub fn new(origin: StationId) -> Self {
        Self {
            route: vec![origin],
            g: 0.0,
            h: 0.0,
        }
    }

    /// Copy this path and append `next`.
    ///
    /// The child inherits `g` and `h` unchanged; scoring updates them
    /// afterwards, which needs the parent's `g` still in place.
    pub fn extended(&self, next: StationId) -> Self {
        let mut route = Vec::with_capacity(self.route.len() + 1);
        route.extend_from_slice(&self.route);
        route.push(next);

        Self {
            route,
            g: self.g,
            h: self.h,
        }
    }

    /// Stations visited, origin first.
    pub fn route(&self) -> &[StationId] {
        &self.route
    }

    /// Station the path currently ends at.
    pub fn last(&self) -> StationId {
        self.route[self.route.len() - 1]
    }

    /// Station before [`last`](Self::last), `None` for a single-station path.
    pub fn penultimate(&self) -> Option<StationId> {
        self.route.len().checked_sub(2).map(|idx| self.route[idx])
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.route.len() - 1
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    /// True if some station appears more than once on the route.
    pub fn has_cycle(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.route.len());
        !self.route.iter().all(|id| seen.insert(*id))
    }

    pub(crate) fn add_cost(&mut self, increment: f64) {
        self.g += increment;
    }

    pub(crate) fn set_estimate(&mut self, h: f64) {
        self.h = h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<StationId> {
        raw.iter().copied().map(StationId).collect()
    }

    #[test]
    fn new_path_is_single_station() {
        let path = Path::new(StationId(5));

        assert_eq!(path.route(), ids(&[5]).as_slice());
        assert_eq!(path.last(), StationId(5));
        assert_eq!(path.penultimate(), None);
        assert_eq!(path.route().len(), 1);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.g(), 0.0);
        assert_eq!(path.f(), 0.0);
    }

    #[test]
    fn extended_copies_prefix_and_costs() {
        let mut parent = Path::new(StationId(1));
        parent.add_cost(2.5);
        parent.set_estimate(1.0);

        let child = parent.extended(StationId(2));

        assert_eq!(child.route(), ids(&[1, 2]).as_slice());
        assert_eq!(child.last(), StationId(2));
        assert_eq!(child.penultimate(), Some(StationId(1)));
        assert_eq!(child.g(), 2.5);
        assert_eq!(child.h(), 1.0);
        assert_eq!(child.f(), 3.5);
    }

    #[test]
    fn branching_does_not_alias() {
        let parent = Path::new(StationId(1)).extended(StationId(2));
        let mut left = parent.extended(StationId(3));
        let right = parent.extended(StationId(4));
        left.add_cost(10.0);

        assert_eq!(parent.route(), ids(&[1, 2]).as_slice());
        assert_eq!(left.route(), ids(&[1, 2, 3]).as_slice());
        assert_eq!(right.route(), ids(&[1, 2, 4]).as_slice());
        assert_eq!(right.g(), 0.0);
        assert_eq!(parent.g(), 0.0);
    }

    #[test]
    fn cycle_detection() {
        let path = Path::new(StationId(1))
            .extended(StationId(2))
            .extended(StationId(3));
        assert!(!path.has_cycle());
        assert!(path.extended(StationId(2)).has_cycle());
        assert!(path.extended(StationId(1)).has_cycle());
        assert!(!path.extended(StationId(4)).has_cycle());
    }

    #[test]
    fn estimate_overwrites_and_cost_accumulates() {
        let mut path = Path::new(StationId(1));
        path.set_estimate(4.0);
        path.set_estimate(2.0);
        path.add_cost(1.0);
        path.add_cost(1.5);

        assert_eq!(path.h(), 2.0);
        assert_eq!(path.g(), 2.5);
        assert_eq!(path.f(), 4.5);
    }
}
