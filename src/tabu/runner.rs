//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a uniformly random permutation
//! 2. At each iteration:
//!    a. Scan every position pair `(i, j)`, `i < j`, with O(1) delta evaluation
//!    b. Select the cheapest resulting tour whose pair is not tabu
//!    c. Apply it and forbid the pair for `tenure` iterations; if every pair
//!    is tabu, restart from a fresh random permutation
//!    d. Recompute the current cost and update the global best
//! 3. Terminate once the wall-clock budget is spent
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::time::Instant;

use rand::rngs::StdRng;

use super::config::TabuConfig;
use super::types::{TabuMemory, TabuStep};
use crate::cost::tour_cost;
use crate::error::{AtspError, Result};
use crate::matrix::{Cost, CostMatrix};
use crate::neighborhood::{Neighborhood, SwapNeighborhood};
use crate::random::{create_rng, random_tour};
use crate::solver::{check_instance, SolveResult, Solver};

/// Time-bounded tabu search over a pairwise move neighborhood.
///
/// # Examples
///
/// ```
/// use atsp_metaheur::{CostMatrix, Solver};
/// use atsp_metaheur::tabu::{TabuConfig, TabuSearch};
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![5, 0, 9, 10],
///     vec![6, 13, 0, 12],
///     vec![8, 8, 9, 0],
/// ]).unwrap();
///
/// let config = TabuConfig::default().with_max_seconds(0.05).with_seed(7);
/// let mut search = TabuSearch::new(&m, config).unwrap();
/// search.solve();
/// assert!(search.best_cost() <= 39);
/// ```
#[derive(Debug)]
pub struct TabuSearch<'a, N: Neighborhood = SwapNeighborhood> {
    matrix: &'a CostMatrix,
    neighborhood: N,
    config: TabuConfig,
    tenure: usize,
    rng: StdRng,
    current: Vec<usize>,
    current_cost: Cost,
    iteration: usize,
    memory: TabuMemory,
    result: SolveResult,
    started: Instant,
}

impl<'a> TabuSearch<'a, SwapNeighborhood> {
    /// Creates a swap-neighborhood search.
    ///
    /// Fails on instances with fewer than two cities and when the config
    /// names a neighborhood without an implementation.
    pub fn new(matrix: &'a CostMatrix, config: TabuConfig) -> Result<Self> {
        if !config.neighborhood.is_supported() {
            return Err(AtspError::UnsupportedNeighborhood(config.neighborhood));
        }
        Self::with_neighborhood(matrix, config, SwapNeighborhood)
    }
}

impl<'a, N: Neighborhood> TabuSearch<'a, N> {
    /// Creates a search over a caller-supplied neighborhood.
    pub fn with_neighborhood(
        matrix: &'a CostMatrix,
        config: TabuConfig,
        neighborhood: N,
    ) -> Result<Self> {
        check_instance(matrix)?;
        let mut config = config.sanitized();
        config.neighborhood = neighborhood.kind();

        let n = matrix.size();
        let mut search = Self {
            matrix,
            neighborhood,
            tenure: config.tenure_for(n),
            rng: create_rng(config.seed),
            config,
            current: Vec::new(),
            current_cost: 0,
            iteration: 0,
            memory: TabuMemory::new(n),
            result: SolveResult::unsolved(),
            started: Instant::now(),
        };
        search.reset();
        Ok(search)
    }

    /// Restarts the search state: new random tour, empty memory, iteration 0,
    /// fresh result and clock.
    pub fn reset(&mut self) {
        let n = self.matrix.size();
        self.rng = create_rng(self.config.seed);
        self.started = Instant::now();
        self.current = random_tour(n, &mut self.rng);
        self.current_cost = tour_cost(&self.current, self.matrix);
        self.iteration = 0;
        self.memory.clear();
        self.result = SolveResult::unsolved();
        self.result.offer(&self.current, self.current_cost, self.started);
    }

    /// Runs one iteration: full neighbor scan, move or restart, best update.
    pub fn step(&mut self) -> TabuStep {
        let n = self.current.len();
        let mut chosen: Option<(usize, usize, Cost)> = None;

        for i in 0..n {
            for j in (i + 1)..n {
                let cost = self.current_cost
                    + self.neighborhood.delta(&self.current, self.matrix, i, j);

                let admissible = !self.memory.is_tabu(i, j, self.iteration)
                    || (self.config.aspiration && cost < self.result.best_cost);

                if admissible && chosen.is_none_or(|(_, _, best)| cost < best) {
                    chosen = Some((i, j, cost));
                }
            }
        }

        let step = match chosen {
            Some((i, j, predicted)) => {
                self.neighborhood.apply(&mut self.current, i, j);
                self.memory.forbid(i, j, self.iteration.saturating_add(self.tenure));
                self.current_cost = tour_cost(&self.current, self.matrix);
                debug_assert_eq!(self.current_cost, predicted, "delta drifted from full cost");
                TabuStep::Moved {
                    i,
                    j,
                    cost: self.current_cost,
                }
            }
            None => {
                self.current = random_tour(n, &mut self.rng);
                self.current_cost = tour_cost(&self.current, self.matrix);
                tracing::trace!(iteration = self.iteration, "all moves tabu, restarting");
                TabuStep::Restarted {
                    cost: self.current_cost,
                }
            }
        };

        self.result.offer(&self.current, self.current_cost, self.started);
        self.iteration += 1;
        self.result.iterations = self.iteration;
        step
    }

    /// Tabu memory, for inspection between steps.
    pub fn memory(&self) -> &TabuMemory {
        &self.memory
    }

    /// Iterations completed since the last reset.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Tenure in effect.
    pub fn tenure(&self) -> usize {
        self.tenure
    }

    /// Tour the search currently stands on.
    pub fn current_tour(&self) -> &[usize] {
        &self.current
    }

    /// Cost of the current tour.
    pub fn current_cost(&self) -> Cost {
        self.current_cost
    }
}

impl<N: Neighborhood> Solver for TabuSearch<'_, N> {
    fn name(&self) -> &str {
        "Tabu Search"
    }

    fn solve(&mut self) -> &SolveResult {
        self.reset();
        tracing::debug!(
            cities = self.matrix.size(),
            tenure = self.tenure,
            budget = ?self.config.max_duration,
            "tabu search started"
        );

        loop {
            self.step();
            if self.started.elapsed() >= self.config.max_duration {
                break;
            }
        }

        tracing::info!(
            cost = self.result.best_cost,
            found_at = self.result.best_found_at,
            iterations = self.iteration,
            "tabu search finished"
        );
        &self.result
    }

    fn result(&self) -> &SolveResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::is_permutation;
    use crate::neighborhood::NeighborhoodKind;
    use std::time::Duration;

    fn pseudo_random_matrix(n: usize, salt: usize) -> CostMatrix {
        let costs = (0..n * n)
            .map(|k| ((k * 7919 + salt * 104_729) % 97 + 1) as Cost)
            .collect();
        CostMatrix::from_flat(n, costs).unwrap()
    }

    fn quick(seed: u64) -> TabuConfig {
        TabuConfig::default()
            .with_max_duration(Duration::from_millis(50))
            .with_seed(seed)
    }

    #[test]
    fn test_tabu_solves_four_city_instance() {
        let m = CostMatrix::from_rows(vec![
            vec![0, 10, 15, 20],
            vec![5, 0, 9, 10],
            vec![6, 13, 0, 12],
            vec![8, 8, 9, 0],
        ])
        .unwrap();
        let mut search = TabuSearch::new(&m, quick(42)).unwrap();
        let result = search.solve().clone();
        // 35 is the optimum of this instance.
        assert_eq!(result.best_cost, 35);
        assert_eq!(tour_cost(&result.best_tour, &m), 35);
    }

    #[test]
    fn test_tabu_best_is_consistent_permutation() {
        let m = pseudo_random_matrix(12, 1);
        let mut search = TabuSearch::new(&m, quick(1)).unwrap();
        let result = search.solve();
        assert!(is_permutation(&result.best_tour, 12));
        assert_eq!(result.best_cost, tour_cost(&result.best_tour, &m));
        assert!(result.iterations > 0);
        assert!(result.best_found_at >= 0.0);
    }

    #[test]
    fn test_tabu_cost_history_non_increasing() {
        let m = pseudo_random_matrix(10, 2);
        let mut search = TabuSearch::new(&m, quick(5)).unwrap();
        let result = search.solve();
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] < window[0],
                "best cost history should decrease: {} -> {}",
                window[0],
                window[1]
            );
        }
        assert_eq!(result.cost_history.last(), Some(&result.best_cost));
    }

    #[test]
    fn test_tabu_step_forbids_applied_swap() {
        let m = pseudo_random_matrix(6, 3);
        let mut search = TabuSearch::new(&m, quick(11)).unwrap();
        assert_eq!(search.tenure(), 6);

        let before = search.iteration();
        let (i, j) = match search.step() {
            TabuStep::Moved { i, j, .. } => (i, j),
            other => panic!("expected a move on a fresh memory, got {other:?}"),
        };
        assert_eq!(search.memory().forbidden_until(i, j), before + 6);

        // The pair stays excluded until the tenure has elapsed.
        while search.iteration() < before + 6 {
            assert!(search.memory().is_tabu(i, j, search.iteration()));
            if let TabuStep::Moved { i: a, j: b, .. } = search.step() {
                assert_ne!((a, b), (i, j));
            }
        }
        assert!(!search.memory().is_tabu(i, j, search.iteration()));
    }

    #[test]
    fn test_tabu_configured_tenure_is_used() {
        let m = pseudo_random_matrix(8, 4);
        let config = quick(3).with_tabu_tenure(3);
        let mut search = TabuSearch::new(&m, config).unwrap();
        assert_eq!(search.tenure(), 3);
        if let TabuStep::Moved { i, j, .. } = search.step() {
            assert_eq!(search.memory().forbidden_until(i, j), 3);
        } else {
            panic!("expected a move");
        }
    }

    #[test]
    fn test_tabu_restarts_when_all_moves_tabu() {
        // Two cities have a single pair, tabu right after its first use.
        let m = CostMatrix::from_rows(vec![vec![0, 3], vec![4, 0]]).unwrap();
        let mut search = TabuSearch::new(&m, quick(9)).unwrap();
        assert!(matches!(search.step(), TabuStep::Moved { i: 0, j: 1, .. }));
        assert!(matches!(search.step(), TabuStep::Restarted { cost: 7 }));
        // Tenure 2 set at iteration 0 expires at iteration 2.
        assert!(matches!(search.step(), TabuStep::Moved { i: 0, j: 1, .. }));
    }

    #[test]
    fn test_tabu_huge_tenure_saturates() {
        let m = pseudo_random_matrix(3, 10);
        let config = quick(5).with_tabu_tenure(usize::MAX);
        let mut search = TabuSearch::new(&m, config).unwrap();
        assert_eq!(search.tenure(), usize::MAX);

        // Three pairs, each forbidden for good once used.
        for _ in 0..3 {
            let step = search.step();
            let TabuStep::Moved { i, j, .. } = step else {
                panic!("expected a move, got {step:?}");
            };
            assert_eq!(search.memory().forbidden_until(i, j), usize::MAX);
        }
        for _ in 0..3 {
            assert!(matches!(search.step(), TabuStep::Restarted { .. }));
        }
        assert_eq!(search.current_cost(), tour_cost(search.current_tour(), &m));
    }

    #[test]
    fn test_tabu_step_tracks_current_cost_exactly() {
        let m = pseudo_random_matrix(9, 5);
        let mut search = TabuSearch::new(&m, quick(8)).unwrap();
        for _ in 0..50 {
            let step = search.step();
            assert_eq!(step.cost(), search.current_cost());
            assert_eq!(search.current_cost(), tour_cost(search.current_tour(), &m));
            assert!(search.best_cost() <= search.current_cost());
        }
    }

    #[test]
    fn test_tabu_aspiration_keeps_costs_consistent() {
        let m = pseudo_random_matrix(10, 6);
        let mut plain = TabuSearch::new(&m, quick(21)).unwrap();
        let mut aspiring = TabuSearch::new(&m, quick(21).with_aspiration(true)).unwrap();
        // Same seed, same start.
        assert_eq!(plain.current_tour(), aspiring.current_tour());
        for _ in 0..30 {
            plain.step();
            aspiring.step();
        }
        assert_eq!(aspiring.best_cost(), tour_cost(aspiring.best_tour(), &m));
        assert_eq!(plain.best_cost(), tour_cost(plain.best_tour(), &m));
    }

    #[test]
    fn test_tabu_respects_deadline() {
        let m = pseudo_random_matrix(15, 7);
        let mut search = TabuSearch::new(&m, quick(2)).unwrap();
        let started = Instant::now();
        search.solve();
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_tabu_rejects_single_city() {
        let m = CostMatrix::from_rows(vec![vec![0]]).unwrap();
        assert!(matches!(
            TabuSearch::new(&m, TabuConfig::default()),
            Err(AtspError::InvalidInstance { cities: 1 })
        ));
    }

    #[test]
    fn test_tabu_rejects_unimplemented_neighborhoods() {
        let m = pseudo_random_matrix(5, 8);
        for kind in [NeighborhoodKind::TwoOpt, NeighborhoodKind::ThreeOpt] {
            let config = TabuConfig::default().with_neighborhood(kind);
            assert!(matches!(
                TabuSearch::new(&m, config),
                Err(AtspError::UnsupportedNeighborhood(k)) if k == kind
            ));
        }
    }

    #[test]
    fn test_tabu_same_seed_same_trajectory() {
        let m = pseudo_random_matrix(8, 9);
        let mut a = TabuSearch::new(&m, quick(77)).unwrap();
        let mut b = TabuSearch::new(&m, quick(77)).unwrap();
        for _ in 0..40 {
            assert_eq!(a.step(), b.step());
        }
    }
}
