//! Redundant-path pruning for A*.
//!
//! Dominance is keyed on the end station and `g` only: a path is
//! redundant when another path already reached the same station at no
//! greater cost, whatever stations either one passed through.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::trace;

use crate::domain::StationId;

use super::path::Path;

/// Lowest `g` seen so far for any path ending at each station.
///
/// Values only ever decrease. One table per search.
#[derive(Debug, Clone, Default)]
pub struct VisitedCosts {
    best: HashMap<StationId, f64>,
}

impl VisitedCosts {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Best recorded cost to reach `station`.
    pub fn best(&self, station: StationId) -> Option<f64> {
        self.best.get(&station).copied()
    }

    /// Returns the number of stations with a recorded cost.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Returns true if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

/// Drop expanded paths that are dominated, and frontier entries that the
/// survivors dominate.
///
/// For each expanded path, in order:
/// - no cost recorded for its end station: record it and keep the path
/// - `g` not strictly below the record: drop the path
/// - `g` strictly below the record: lower the record, keep the path and
///   remove every frontier entry ending at that station
///
/// Returns the surviving expanded paths. The frontier is only touched
/// after the expanded paths have all been classified.
pub fn remove_redundant_paths(
    expanded: Vec<Path>,
    frontier: &mut VecDeque<Path>,
    visited: &mut VisitedCosts,
) -> Vec<Path> {
    let mut kept = Vec::with_capacity(expanded.len());
    let mut improved: HashSet<StationId> = HashSet::new();

    for path in expanded {
        let station = path.last();
        match visited.best(station) {
            Some(best) if path.g() >= best => {
                trace!(station = %station, g = path.g(), best, "Dropping redundant path");
                continue;
            }
            Some(best) => {
                trace!(station = %station, g = path.g(), best, "Found cheaper path");
                improved.insert(station);
            }
            None => {}
        }
        visited.best.insert(station, path.g());
        kept.push(path);
    }

    if !improved.is_empty() {
        frontier.retain(|path| !improved.contains(&path.last()));
    }

    kept
}
