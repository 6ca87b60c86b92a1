//! SA execution loop.
//!
//! 1. Seed with the multi-start greedy tour.
//! 2. Calibrate `T0 = -avg(Δ) / ln(p)` from random interior swaps of the
//!    seed, so an average uphill move starts with acceptance probability `p`.
//! 3. Until the deadline: propose a relocation of one interior city, cool
//!    once per proposal, re-propose until the acceptance rule passes, adopt,
//!    record improvements.
//!
//! Position 0 stays fixed; every cyclic tour has a rotation with its start
//! city there, so nothing is lost.

use std::time::Instant;

use rand::Rng;

use super::config::SaConfig;
use crate::cost::{apply_relocate, relocate_delta, swap_delta, tour_cost};
use crate::error::Result;
use crate::greedy::{GreedyConfig, GreedySolver};
use crate::matrix::{Cost, CostMatrix};
use crate::random::{create_rng, distinct_pair};
use crate::solver::{SolveResult, Solver};

/// Initial temperature used when calibration yields a non-positive value
/// (for instance when every sampled swap improves the seed).
pub const FALLBACK_TEMPERATURE: f64 = 1.0;

/// Time-bounded simulated annealing seeded by the greedy constructor.
///
/// # Examples
///
/// ```
/// use atsp_metaheur::{CostMatrix, Solver};
/// use atsp_metaheur::sa::{SaConfig, SimulatedAnnealing};
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![5, 0, 9, 10],
///     vec![6, 13, 0, 12],
///     vec![8, 8, 9, 0],
/// ]).unwrap();
///
/// let config = SaConfig::default().with_max_seconds(0.05).with_seed(1);
/// let mut sa = SimulatedAnnealing::new(&m, config).unwrap();
/// sa.solve();
/// assert!(sa.best_cost() <= 35);
/// ```
#[derive(Debug)]
pub struct SimulatedAnnealing<'a> {
    matrix: &'a CostMatrix,
    config: SaConfig,
    greedy: GreedySolver<'a>,
    result: SolveResult,
    initial_temperature: f64,
    final_temperature: f64,
    accepted_moves: usize,
}

impl<'a> SimulatedAnnealing<'a> {
    /// Creates the engine; rejects instances with fewer than two cities.
    pub fn new(matrix: &'a CostMatrix, config: SaConfig) -> Result<Self> {
        let greedy = GreedySolver::new(matrix, GreedyConfig::default())?;
        Ok(Self {
            matrix,
            config: config.sanitized(),
            greedy,
            result: SolveResult::unsolved(),
            initial_temperature: 0.0,
            final_temperature: 0.0,
            accepted_moves: 0,
        })
    }

    /// Cost of the greedy seed of the last solve.
    pub fn seed_cost(&self) -> Cost {
        self.greedy.best_cost()
    }

    /// Temperature the last solve started from.
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    /// Temperature when the last solve stopped.
    pub fn final_temperature(&self) -> f64 {
        self.final_temperature
    }

    /// Proposals adopted during the last solve.
    pub fn accepted_moves(&self) -> usize {
        self.accepted_moves
    }

    /// Estimates `T0` from random interior swaps of `tour`.
    fn calibrate<R: Rng>(&self, tour: &[usize], rng: &mut R) -> f64 {
        let n = tour.len();
        let samples = self.config.calibration_samples;
        let mut total = 0.0;
        for _ in 0..samples {
            let (i, j) = distinct_pair(1..n, &mut *rng);
            total += swap_delta(tour, self.matrix, i, j) as f64;
        }
        let average = total / samples as f64;
        let temperature = -average / self.config.target_acceptance.ln();

        if temperature.is_finite() && temperature > 0.0 {
            temperature
        } else {
            tracing::debug!(
                average,
                fallback = FALLBACK_TEMPERATURE,
                "non-positive calibrated temperature"
            );
            FALLBACK_TEMPERATURE
        }
    }
}

impl Solver for SimulatedAnnealing<'_> {
    fn name(&self) -> &str {
        "Simulated Annealing"
    }

    fn solve(&mut self) -> &SolveResult {
        let started = Instant::now();
        let max_duration = self.config.max_duration;
        self.result = SolveResult::unsolved();
        self.accepted_moves = 0;
        self.initial_temperature = 0.0;
        self.final_temperature = 0.0;

        self.greedy.solve();
        let mut current = self.greedy.best_tour().to_vec();
        let mut current_cost = self.greedy.best_cost();
        self.result.offer(&current, current_cost, started);

        let n = current.len();
        if n < 3 {
            // No two distinct interior positions to perturb.
            tracing::debug!(cities = n, "too few cities to anneal, keeping greedy tour");
            return &self.result;
        }

        let mut rng = create_rng(self.config.seed);
        let mut temperature = self.calibrate(&current, &mut rng);
        self.initial_temperature = temperature;
        tracing::debug!(
            initial_temperature = temperature,
            seed_cost = current_cost,
            "annealing started"
        );

        let cooling = self.config.cooling_factor;
        let acceptance = self.config.acceptance;
        let mut proposals = 0usize;

        'anneal: while started.elapsed() < max_duration {
            let (from, to, candidate_cost) = loop {
                if started.elapsed() >= max_duration {
                    break 'anneal;
                }
                let (from, to) = distinct_pair(1..n, &mut rng);
                let candidate_cost =
                    current_cost + relocate_delta(&current, self.matrix, from, to);
                temperature *= cooling;
                proposals += 1;
                if acceptance.accepts(current_cost, candidate_cost, temperature, &mut rng) {
                    break (from, to, candidate_cost);
                }
            };

            apply_relocate(&mut current, from, to);
            current_cost = candidate_cost;
            debug_assert_eq!(current_cost, tour_cost(&current, self.matrix));
            self.accepted_moves += 1;
            self.result.offer(&current, current_cost, started);
        }

        self.result.iterations = proposals;
        self.final_temperature = temperature;
        tracing::debug!(
            final_temperature = temperature,
            frozen_acceptance = (-1.0 / temperature).exp(),
            "annealing stopped"
        );
        tracing::info!(
            cost = self.result.best_cost,
            found_at = self.result.best_found_at,
            proposals,
            accepted = self.accepted_moves,
            "simulated annealing finished"
        );
        &self.result
    }

    fn result(&self) -> &SolveResult {
        &self.result
    }
}
