//! Multi-start greedy constructor.
//!
//! Builds one nearest-unvisited-neighbor tour from every possible start
//! city and keeps the cheapest. Deterministic for a fixed matrix and runs
//! in O(n³). Also used to seed [`crate::sa`].

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::{nearest_neighbor_tour, GreedySolver};
