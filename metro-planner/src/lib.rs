//! Metro route planner.
//!
//! Finds routes between stations of a transit network under four
//! objectives (fewest hops, shortest time, shortest distance, fewest
//! transfers) using depth-first, breadth-first, uniform-cost or A* search.

pub mod domain;
pub mod network;
pub mod planner;
