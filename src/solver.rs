//! Common solver surface and result record.

use std::time::{Duration, Instant};

use crate::error::{AtspError, Result};
use crate::matrix::{Cost, CostMatrix};

/// Outcome of a solve, updated in place while the solver runs.
///
/// Starts as the "unsolved" sentinel: empty tour, cost [`Cost::MAX`]
/// (standing for +∞), timestamp 0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Best tour found (no closing duplicate).
    pub best_tour: Vec<usize>,

    /// Cost of `best_tour`, closing edge included.
    pub best_cost: Cost,

    /// Seconds since solve start at which `best_tour` was recorded.
    pub best_found_at: f64,

    /// Iterations executed (starts, neighbor scans or proposals, depending
    /// on the engine).
    pub iterations: usize,

    /// Best cost after each improvement, in order.
    pub cost_history: Vec<Cost>,
}

impl SolveResult {
    /// The "no solution" sentinel.
    pub fn unsolved() -> Self {
        Self {
            best_tour: Vec::new(),
            best_cost: Cost::MAX,
            best_found_at: 0.0,
            iterations: 0,
            cost_history: Vec::new(),
        }
    }

    /// Whether any tour has been recorded.
    pub fn is_solved(&self) -> bool {
        !self.best_tour.is_empty()
    }

    /// Records `tour` as the new best if it is strictly cheaper.
    ///
    /// Returns `true` when the record changed.
    pub(crate) fn offer(&mut self, tour: &[usize], cost: Cost, started: Instant) -> bool {
        if cost >= self.best_cost {
            return false;
        }
        self.best_tour.clear();
        self.best_tour.extend_from_slice(tour);
        self.best_cost = cost;
        self.best_found_at = started.elapsed().as_secs_f64();
        self.cost_history.push(cost);
        tracing::trace!(cost, at = self.best_found_at, "new best tour");
        true
    }
}

impl Default for SolveResult {
    fn default() -> Self {
        Self::unsolved()
    }
}

/// A time- or work-bounded ATSP solver.
///
/// Implementors own their search state and borrow the matrix for their
/// whole lifetime. `solve` runs to completion; the accessors read the
/// recorded result afterwards.
pub trait Solver {
    /// Human-readable engine name.
    fn name(&self) -> &str;

    /// Runs the search and returns the final result.
    fn solve(&mut self) -> &SolveResult;

    /// Result recorded so far.
    fn result(&self) -> &SolveResult;

    /// Best tour found.
    fn best_tour(&self) -> &[usize] {
        &self.result().best_tour
    }

    /// Cost of the best tour ([`Cost::MAX`] before solving).
    fn best_cost(&self) -> Cost {
        self.result().best_cost
    }

    /// Seconds since solve start at which the best tour was found.
    fn best_found_at(&self) -> f64 {
        self.result().best_found_at
    }
}

/// Wall-clock budget used when a configured one is invalid.
pub const DEFAULT_MAX_SECONDS: f64 = 10.0;

/// Converts a budget in seconds, falling back to [`DEFAULT_MAX_SECONDS`]
/// for negative, non-finite or unrepresentable input.
pub(crate) fn budget_from_secs(secs: f64) -> Duration {
    match Duration::try_from_secs_f64(secs) {
        Ok(duration) => duration,
        Err(_) => {
            tracing::warn!(
                secs,
                default = DEFAULT_MAX_SECONDS,
                "invalid time budget, using default"
            );
            Duration::from_secs_f64(DEFAULT_MAX_SECONDS)
        }
    }
}

/// Rejects instances too small for a tour search.
pub(crate) fn check_instance(matrix: &CostMatrix) -> Result<()> {
    if matrix.size() < 2 {
        return Err(AtspError::InvalidInstance {
            cities: matrix.size(),
        });
    }
    Ok(())
}
