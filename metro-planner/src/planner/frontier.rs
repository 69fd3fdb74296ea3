//! Frontier insertion policies.

use std::collections::VecDeque;

use super::path::Path;

/// How newly expanded paths join the frontier.
///
/// The search always expands the head of the frontier, so the policy
/// alone decides the exploration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// New paths go in front, in expansion order (depth-first).
    Stack,
    /// New paths go at the back (breadth-first).
    Queue,
    /// Append, then stable-sort the whole frontier by `g` (uniform cost).
    ByCost,
    /// Append, then stable-sort the whole frontier by `f = g + h` (A*).
    ByEstimate,
}

impl Insertion {
    /// Insert `expanded` into `frontier`.
    ///
    /// Sorting policies keep equal keys in their prior relative order,
    /// with existing entries ahead of the new ones.
    pub fn insert(self, frontier: &mut VecDeque<Path>, expanded: Vec<Path>) {
        match self {
            Insertion::Stack => {
                for path in expanded.into_iter().rev() {
                    frontier.push_front(path);
                }
            }
            Insertion::Queue => frontier.extend(expanded),
            Insertion::ByCost => {
                frontier.extend(expanded);
                frontier
                    .make_contiguous()
                    .sort_by(|a, b| a.g().total_cmp(&b.g()));
            }
            Insertion::ByEstimate => {
                frontier.extend(expanded);
                frontier
                    .make_contiguous()
                    .sort_by(|a, b| a.f().total_cmp(&b.f()));
            }
        }
    }
}
