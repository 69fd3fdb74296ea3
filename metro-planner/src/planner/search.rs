//! Generic best-first search driver and its entry points.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::domain::{Point, Preference, StationId};
use crate::network::Network;

use super::config::SearchConfig;
use super::cost::score_cost;
use super::expand::{expand, remove_cycles};
use super::frontier::Insertion;
use super::heuristic::score_heuristic;
use super::nearest::nearest_station;
use super::path::Path;
use super::prune::{VisitedCosts, remove_redundant_paths};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Origin or destination is not a station of the network
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// Coordinate search needs at least one station to snap to
    #[error("network has no stations")]
    EmptyNetwork,

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::UniformCost,
        Algorithm::AStar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::UniformCost => "ucs",
            Algorithm::AStar => "astar",
        }
    }

    /// Loop parameters for this algorithm under `preference`.
    ///
    /// Depth- and breadth-first never score, so they ignore the preference.
    fn driver(self, preference: Preference) -> Driver {
        match self {
            Algorithm::DepthFirst => Driver {
                insertion: Insertion::Stack,
                cost: None,
                heuristic: None,
                prune: false,
            },
            Algorithm::BreadthFirst => Driver {
                insertion: Insertion::Queue,
                cost: None,
                heuristic: None,
                prune: false,
            },
            Algorithm::UniformCost => Driver {
                insertion: Insertion::ByCost,
                cost: Some(preference),
                heuristic: None,
                prune: false,
            },
            Algorithm::AStar => Driver {
                insertion: Insertion::ByEstimate,
                cost: Some(preference),
                heuristic: Some(preference),
                prune: true,
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "ucs" | "uniform-cost" => Ok(Algorithm::UniformCost),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(SearchError::InvalidRequest(format!(
                "unknown algorithm {s:?}"
            ))),
        }
    }
}

/// Request for route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub origin: StationId,
    pub destination: StationId,
    pub algorithm: Algorithm,
    /// What to minimise. Ignored by depth- and breadth-first search.
    pub preference: Preference,
}

impl SearchRequest {
    /// Create a new search request minimising hops.
    pub fn new(origin: StationId, destination: StationId, algorithm: Algorithm) -> Self {
        Self {
            origin,
            destination,
            algorithm,
            preference: Preference::ByHops,
        }
    }

    /// Set the preference.
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = preference;
        self
    }

    /// Validate the search request against a network.
    pub fn validate(&self, network: &Network) -> Result<(), SearchError> {
        for station in [self.origin, self.destination] {
            if !network.contains(station) {
                return Err(SearchError::UnknownStation(station));
            }
        }
        Ok(())
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The path ends at the destination.
    Found(Path),
    /// The frontier ran out first. `last_explored` is the last path taken
    /// off the frontier and does not reach the destination.
    Unreachable { last_explored: Path },
}

impl SearchOutcome {
    /// Returns true if the destination was reached.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The route to the destination, if one was found.
    pub fn found(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::Unreachable { .. } => None,
        }
    }

    /// The path the search ended on, whether or not it reaches the destination.
    pub fn path(&self) -> &Path {
        match self {
            SearchOutcome::Found(path) => path,
            SearchOutcome::Unreachable { last_explored } => last_explored,
        }
    }

    pub fn into_path(self) -> Path {
        match self {
            SearchOutcome::Found(path) => path,
            SearchOutcome::Unreachable { last_explored } => last_explored,
        }
    }
}

/// Result of route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub outcome: SearchOutcome,

    /// Number of paths taken off the frontier and expanded.
    pub paths_expanded: usize,
}

/// Result of a search between two arbitrary coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRoute {
    /// Station nearest to the origin coordinate.
    pub origin_station: StationId,

    /// Station nearest to the destination coordinate.
    pub destination_station: StationId,

    /// Time to walk from the origin coordinate to `origin_station`.
    pub walk_to_origin: f64,

    /// Time to walk from `destination_station` to the destination coordinate.
    pub walk_from_destination: f64,

    /// Time-minimising search between the two stations.
    pub result: SearchResult,
}

impl CoordinateRoute {
    /// Door-to-door time: both walks plus the network travel time.
    ///
    /// `None` if the stations are not connected.
    pub fn total_time(&self) -> Option<f64> {
        self.result
            .outcome
            .found()
            .map(|path| self.walk_to_origin + path.g() + self.walk_from_destination)
    }
}

/// Parameters of the shared search loop.
#[derive(Debug, Clone, Copy)]
struct Driver {
    insertion: Insertion,
    /// Cost model to score with, if any.
    cost: Option<Preference>,
    /// Heuristic to score with, if any.
    heuristic: Option<Preference>,
    /// Whether to discard dominated paths.
    prune: bool,
}

impl Driver {
    fn run(&self, network: &Network, origin: StationId, destination: StationId) -> SearchResult {
        let mut frontier: VecDeque<Path> = VecDeque::from([Path::new(origin)]);
        let mut visited = VisitedCosts::new();
        let mut last_explored = Path::new(origin);
        let mut paths_expanded = 0;

        while let Some(head) = frontier.pop_front() {
            if head.last() == destination {
                return SearchResult {
                    outcome: SearchOutcome::Found(head),
                    paths_expanded,
                };
            }

            paths_expanded += 1;
            trace!(
                station = %head.last(),
                g = head.g(),
                frontier = frontier.len(),
                "Expanding path"
            );

            let mut expanded = remove_cycles(expand(&head, network));
            if let Some(preference) = self.heuristic {
                score_heuristic(&mut expanded, network, destination, preference);
            }
            if let Some(preference) = self.cost {
                score_cost(&mut expanded, network, preference);
            }
            if self.prune {
                expanded = remove_redundant_paths(expanded, &mut frontier, &mut visited);
            }
            self.insertion.insert(&mut frontier, expanded);

            last_explored = head;
        }

        SearchResult {
            outcome: SearchOutcome::Unreachable { last_explored },
            paths_expanded,
        }
    }
}

/// Route planner over a network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Search for a route between two stations.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate(self.network)?;

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            algorithm = %request.algorithm,
            preference = %request.preference,
            "Starting search"
        );

        let result = request.algorithm.driver(request.preference).run(
            self.network,
            request.origin,
            request.destination,
        );

        debug!(
            found = result.outcome.is_found(),
            g = result.outcome.path().g(),
            paths_expanded = result.paths_expanded,
            "Search complete"
        );

        Ok(result)
    }

    /// Search between two arbitrary coordinates.
    ///
    /// Both points snap to their nearest station, then A* minimises travel
    /// time between those stations.
    pub fn search_from_coordinates(
        &self,
        origin: Point,
        destination: Point,
    ) -> Result<CoordinateRoute, SearchError> {
        for (label, point) in [("origin", origin), ("destination", destination)] {
            if !point.is_finite() {
                return Err(SearchError::InvalidRequest(format!(
                    "{label} coordinates ({}, {}) are not finite",
                    point.x, point.y
                )));
            }
        }

        let (origin_station, origin_distance) =
            nearest_station(origin, self.network).ok_or(SearchError::EmptyNetwork)?;
        let (destination_station, destination_distance) =
            nearest_station(destination, self.network).ok_or(SearchError::EmptyNetwork)?;

        debug!(
            origin = %origin_station,
            destination = %destination_station,
            "Snapped coordinates to stations"
        );

        let request = SearchRequest::new(origin_station, destination_station, Algorithm::AStar)
            .with_preference(Preference::ByTime);
        let result = self.search(&request)?;

        Ok(CoordinateRoute {
            origin_station,
            destination_station,
            walk_to_origin: self.config.walk_time(origin_distance),
            walk_from_destination: self.config.walk_time(destination_distance),
            result,
        })
    }
}

fn run_default(
    network: &Network,
    origin: StationId,
    destination: StationId,
    algorithm: Algorithm,
    preference: Preference,
) -> Result<SearchOutcome, SearchError> {
    let config = SearchConfig::default();
    let request = SearchRequest::new(origin, destination, algorithm).with_preference(preference);
    Planner::new(network, &config)
        .search(&request)
        .map(|result| result.outcome)
}

/// Depth-first search: the most recently expanded path is explored first.
pub fn depth_first_search(
    origin: StationId,
    destination: StationId,
    network: &Network,
) -> Result<SearchOutcome, SearchError> {
    run_default(network, origin, destination, Algorithm::DepthFirst, Preference::ByHops)
}

/// Breadth-first search: paths are explored in arrival order.
pub fn breadth_first_search(
    origin: StationId,
    destination: StationId,
    network: &Network,
) -> Result<SearchOutcome, SearchError> {
    run_default(network, origin, destination, Algorithm::BreadthFirst, Preference::ByHops)
}

/// Uniform-cost search: returns a route of minimal `g` under `preference`.
pub fn uniform_cost_search(
    origin: StationId,
    destination: StationId,
    network: &Network,
    preference: Preference,
) -> Result<SearchOutcome, SearchError> {
    run_default(network, origin, destination, Algorithm::UniformCost, preference)
}

/// A* search with the heuristic matching `preference`.
pub fn astar_search(
    origin: StationId,
    destination: StationId,
    network: &Network,
    preference: Preference,
) -> Result<SearchOutcome, SearchError> {
    run_default(network, origin, destination, Algorithm::AStar, preference)
}

/// Time-minimising A* between the stations nearest to two coordinates.
pub fn astar_from_coordinates(
    origin: Point,
    destination: Point,
    network: &Network,
) -> Result<CoordinateRoute, SearchError> {
    let config = SearchConfig::default();
    Planner::new(network, &config).search_from_coordinates(origin, destination)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
