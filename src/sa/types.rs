//! Acceptance criteria for annealing proposals.

use rand::Rng;

use crate::matrix::Cost;

/// Metropolis value above which the strict rule accepts a proposal.
pub const STRICT_THRESHOLD: f64 = 0.9;

/// How the annealing loop decides whether to adopt a proposal.
///
/// `Strict` only ever adopts strictly improving proposals whose Metropolis
/// value `exp((current - candidate) / T)` exceeds [`STRICT_THRESHOLD`].
/// Worsening proposals are never adopted, so temperature only shapes how
/// long the search keeps proposing before it settles.
///
/// `Metropolis` is the textbook rule: improving proposals are always
/// adopted, worsening ones with probability `exp(-Δ / T)`.
///
/// # References
///
/// Metropolis et al. (1953), Kirkpatrick, Gelatt & Vecchi (1983)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcceptanceRule {
    /// Improvement and a Metropolis value above the threshold.
    #[default]
    Strict,
    /// Classical probabilistic acceptance.
    Metropolis,
}

impl AcceptanceRule {
    /// Decides on a proposal of cost `candidate` from a tour of cost
    /// `current` at `temperature`.
    pub fn accepts<R: Rng>(
        self,
        current: Cost,
        candidate: Cost,
        temperature: f64,
        rng: &mut R,
    ) -> bool {
        match self {
            AcceptanceRule::Strict => {
                let metropolis = ((current - candidate) as f64 / temperature).exp();
                candidate < current && metropolis > STRICT_THRESHOLD
            }
            AcceptanceRule::Metropolis => {
                let delta = (candidate - current) as f64;
                if delta < 0.0 {
                    true
                } else if temperature > 0.0 {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                } else {
                    false
                }
            }
        }
    }
}
