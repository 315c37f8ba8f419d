//! Word ladder graph search
//!
//! The adjacency graph is implicit: two dictionary words are linked when they
//! differ in exactly one letter. Neighbours are found by scanning the
//! dictionary in order.

mod explorer;
mod path_finder;

pub use explorer::{ConnectivityExplorer, DepthProfile, VisitedMap, explore};
pub use path_finder::{LadderResult, PathFinder, Step, find_shortest_paths};
