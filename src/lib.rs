//! Heuristic solvers for the Asymmetric Traveling Salesman Problem (ATSP).
//!
//! Given an n×n matrix of directed integer costs, find a cyclic tour
//! through every city with minimal total cost. Three engines share one
//! cost model:
//!
//! - **Greedy** ([`greedy`]): nearest unvisited neighbor from every start
//!   city; keeps the cheapest tour. Deterministic.
//! - **Tabu Search** ([`tabu`]): full pairwise-swap scan per iteration with
//!   a tenure matrix forbidding recently swapped position pairs; random
//!   restart when every move is tabu.
//! - **Simulated Annealing** ([`sa`]): seeded by the greedy tour, initial
//!   temperature calibrated from sampled swaps, relocation moves until the
//!   time budget runs out.
//!
//! Every engine borrows a validated [`CostMatrix`], runs to completion
//! under its configured budget and exposes its best tour, cost and
//! discovery time through the [`Solver`] trait.
//!
//! # Examples
//!
//! ```
//! use atsp_metaheur::{CostMatrix, Solver};
//! use atsp_metaheur::tabu::{TabuConfig, TabuSearch};
//!
//! let m = CostMatrix::from_rows(vec![
//!     vec![0, 10, 15, 20],
//!     vec![5, 0, 9, 10],
//!     vec![6, 13, 0, 12],
//!     vec![8, 8, 9, 0],
//! ])?;
//!
//! let mut search = TabuSearch::new(&m, TabuConfig::default().with_max_seconds(0.05))?;
//! let result = search.solve();
//! assert_eq!(result.best_cost, atsp_metaheur::tour_cost(&result.best_tour, &m));
//! # Ok::<(), atsp_metaheur::AtspError>(())
//! ```
//!
//! Tours never repeat the start city; the closing edge is implicit.
//!
//! # Features
//!
//! - `parallel`: greedy start cities are scanned on a rayon pool
//!   ([`greedy::GreedyConfig::with_parallel`]). Run the test suite with
//!   `--features parallel` to cover that path.
//! - `serde`: `Serialize`/`Deserialize` for matrices, results and enums.

pub mod cost;
pub mod error;
pub mod greedy;
pub mod matrix;
pub mod neighborhood;
pub mod random;
pub mod sa;
pub mod solver;
pub mod tabu;
pub mod tour_file;

pub use cost::{swap_delta, tour_cost};
pub use error::{AtspError, Result};
pub use matrix::{Cost, CostMatrix};
pub use solver::{SolveResult, Solver};
