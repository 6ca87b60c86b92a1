//! Tabu memory and step outcomes.

use crate::matrix::Cost;

/// Short-term memory over unordered pairs of tour positions.
///
/// Each pair `(i, j)` stores the iteration until which swapping it again is
/// forbidden. A pair is tabu while `forbidden_until(i, j) > iteration`;
/// entries expire implicitly as the iteration counter passes them.
#[derive(Debug, Clone)]
pub struct TabuMemory {
    n: usize,
    forbidden_until: Vec<usize>,
}

impl TabuMemory {
    /// Empty memory for tours of `n` positions.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            forbidden_until: vec![0; n * n],
        }
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        lo * self.n + hi
    }

    /// Iteration until which `(i, j)` is forbidden (0 if never set).
    #[inline]
    pub fn forbidden_until(&self, i: usize, j: usize) -> usize {
        self.forbidden_until[self.index(i, j)]
    }

    /// Whether `(i, j)` is still tabu at `iteration`.
    #[inline]
    pub fn is_tabu(&self, i: usize, j: usize, iteration: usize) -> bool {
        self.forbidden_until(i, j) > iteration
    }

    /// Forbids `(i, j)` until iteration `until`.
    pub fn forbid(&mut self, i: usize, j: usize, until: usize) {
        let idx = self.index(i, j);
        self.forbidden_until[idx] = until;
    }

    /// Forgets every entry.
    pub fn clear(&mut self) {
        self.forbidden_until.fill(0);
    }
}

/// What a single tabu iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabuStep {
    /// The best admissible move `(i, j)` was applied.
    Moved { i: usize, j: usize, cost: Cost },
    /// Every move was tabu; the current tour was replaced by a random one.
    Restarted { cost: Cost },
}

impl TabuStep {
    /// Cost of the current tour after the step.
    pub fn cost(&self) -> Cost {
        match *self {
            TabuStep::Moved { cost, .. } | TabuStep::Restarted { cost } => cost,
        }
    }
}
