//! Tabu Search (TS) over pairwise swaps.
//!
//! A single-solution trajectory metaheuristic that uses short-term memory
//! (a tenure matrix over position pairs) to forbid recently applied swaps,
//! preventing cycling and pushing the search into new regions. When every
//! move is tabu the search restarts from a random permutation.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::TabuSearch;
pub use types::{TabuMemory, TabuStep};
