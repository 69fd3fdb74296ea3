//! Route planner using best-first graph search.
//!
//! Every algorithm runs the same loop: take the head of the frontier,
//! expand it, drop cyclic successors, score them, optionally prune
//! dominated paths, and insert the rest according to the algorithm's
//! insertion policy. The loop stops when the head reaches the
//! destination or the frontier runs dry.

mod config;
mod cost;
mod expand;
mod frontier;
mod heuristic;
mod nearest;
mod path;
mod prune;
mod search;

pub use config::SearchConfig;
pub use cost::{score_cost, step_cost};
pub use expand::{expand, remove_cycles};
pub use frontier::Insertion;
pub use heuristic::{estimate, score_heuristic};
pub use nearest::{nearest_station, stations_by_distance};
pub use path::Path;
pub use prune::{VisitedCosts, remove_redundant_paths};
pub use search::{
    Algorithm, CoordinateRoute, Planner, SearchError, SearchOutcome, SearchRequest, SearchResult,
    astar_from_coordinates, astar_search, breadth_first_search, depth_first_search,
    uniform_cost_search,
};
