//! Greedy construction loop.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::GreedyConfig;
use crate::cost::tour_cost;
use crate::error::Result;
use crate::matrix::{Cost, CostMatrix};
use crate::solver::{check_instance, SolveResult, Solver};

/// Builds a tour from `start` by always moving to the cheapest unvisited
/// city. Ties go to the lowest city index.
pub fn nearest_neighbor_tour(matrix: &CostMatrix, start: usize) -> Vec<usize> {
    let n = matrix.size();
    let mut tour = Vec::with_capacity(n);
    let mut visited = vec![false; n];

    let mut current = start;
    tour.push(current);
    visited[current] = true;

    for _ in 1..n {
        let mut next: Option<(usize, Cost)> = None;
        for (city, &cost) in matrix.row(current).iter().enumerate() {
            if !visited[city] && next.is_none_or(|(_, best)| cost < best) {
                next = Some((city, cost));
            }
        }
        // At least one city is still unvisited here.
        let Some((city, _)) = next else { break };
        visited[city] = true;
        tour.push(city);
        current = city;
    }

    tour
}

/// Multi-start nearest-neighbor solver.
///
/// # Examples
///
/// ```
/// use atsp_metaheur::{CostMatrix, Solver};
/// use atsp_metaheur::greedy::{GreedyConfig, GreedySolver};
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![5, 0, 9, 10],
///     vec![6, 13, 0, 12],
///     vec![8, 8, 9, 0],
/// ]).unwrap();
///
/// let mut solver = GreedySolver::new(&m, GreedyConfig::default()).unwrap();
/// solver.solve();
/// assert_eq!(solver.best_cost(), 35);
/// assert_eq!(solver.best_tour(), &[2, 0, 1, 3]);
/// ```
#[derive(Debug)]
pub struct GreedySolver<'a> {
    matrix: &'a CostMatrix,
    config: GreedyConfig,
    result: SolveResult,
}

impl<'a> GreedySolver<'a> {
    /// Creates a solver; rejects instances with fewer than two cities.
    pub fn new(matrix: &'a CostMatrix, config: GreedyConfig) -> Result<Self> {
        check_instance(matrix)?;
        Ok(Self {
            matrix,
            config,
            result: SolveResult::unsolved(),
        })
    }

    /// The greedy tour from a single start city, with its cost.
    pub fn solve_from(&self, start: usize) -> (Vec<usize>, Cost) {
        let tour = nearest_neighbor_tour(self.matrix, start);
        let cost = tour_cost(&tour, self.matrix);
        (tour, cost)
    }

    #[cfg(feature = "parallel")]
    fn solve_parallel(&mut self, started: Instant) {
        let matrix = self.matrix;
        let n = matrix.size();
        let best = (0..n)
            .into_par_iter()
            .map(|start| {
                let tour = nearest_neighbor_tour(matrix, start);
                (tour_cost(&tour, matrix), start, tour)
            })
            .min_by_key(|(cost, start, _)| (*cost, *start));

        if let Some((cost, _, tour)) = best {
            self.result.offer(&tour, cost, started);
        }
        self.result.iterations = n;
    }

    #[cfg(not(feature = "parallel"))]
    fn solve_parallel(&mut self, started: Instant) {
        tracing::debug!("greedy: `parallel` feature disabled, running sequentially");
        self.solve_sequential(started);
    }

    fn solve_sequential(&mut self, started: Instant) {
        let n = self.matrix.size();
        for start in 0..n {
            let (tour, cost) = self.solve_from(start);
            self.result.offer(&tour, cost, started);
            self.result.iterations += 1;
        }
    }
}

impl Solver for GreedySolver<'_> {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn solve(&mut self) -> &SolveResult {
        let started = Instant::now();
        self.result = SolveResult::unsolved();

        if self.config.parallel {
            self.solve_parallel(started);
        } else {
            self.solve_sequential(started);
        }
        tracing::info!(
            cost = self.result.best_cost,
            starts = self.result.iterations,
            "greedy construction finished"
        );
        &self.result
    }

    fn result(&self) -> &SolveResult {
        &self.result
    }
}
