//! Tabu Search configuration.

use std::time::Duration;

use crate::neighborhood::NeighborhoodKind;
use crate::solver::{budget_from_secs, DEFAULT_MAX_SECONDS};

/// Configuration parameters for [`TabuSearch`](super::TabuSearch).
///
/// Invalid numeric inputs are clamped to their defaults rather than
/// rejected: a negative or non-finite time budget becomes
/// [`DEFAULT_MAX_SECONDS`], a zero tenure becomes "unset" (the city count).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use atsp_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_seconds(2.5)
///     .with_tabu_tenure(7)
///     .with_seed(42);
/// assert_eq!(config.max_duration, Duration::from_millis(2500));
/// assert_eq!(config.tabu_tenure, Some(7));
///
/// let clamped = TabuConfig::default().with_tabu_tenure(0);
/// assert_eq!(clamped.tabu_tenure, None);
/// ```
#[derive(Debug, Clone)]
pub struct TabuConfig {
    /// Wall-clock budget of one solve.
    pub max_duration: Duration,
    /// Iterations a swapped position pair stays forbidden.
    ///
    /// `None` uses the number of cities.
    pub tabu_tenure: Option<usize>,
    /// Whether a tabu move may be taken when it yields a new global best.
    pub aspiration: bool,
    /// Move neighborhood scanned each iteration.
    pub neighborhood: NeighborhoodKind,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_duration: Duration::from_secs_f64(DEFAULT_MAX_SECONDS),
            tabu_tenure: None,
            aspiration: false,
            neighborhood: NeighborhoodKind::Swap,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the time budget.
    pub fn with_max_duration(mut self, duration: Duration) -> Self {
        self.max_duration = duration;
        self
    }

    /// Sets the time budget in seconds; invalid values fall back to the
    /// default.
    pub fn with_max_seconds(mut self, secs: f64) -> Self {
        self.max_duration = budget_from_secs(secs);
        self
    }

    /// Sets the tabu tenure; zero falls back to the city count.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = Some(tenure);
        self.sanitized()
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Selects the neighborhood.
    pub fn with_neighborhood(mut self, neighborhood: NeighborhoodKind) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Applies the clamp-to-default policy to every field.
    pub fn sanitized(mut self) -> Self {
        if self.tabu_tenure == Some(0) {
            tracing::warn!("tabu tenure 0 is invalid, using the city count");
            self.tabu_tenure = None;
        }
        self
    }

    /// Tenure for an instance of `n` cities.
    pub fn tenure_for(&self, n: usize) -> usize {
        self.tabu_tenure.unwrap_or(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_duration, Duration::from_secs(10));
        assert_eq!(config.tabu_tenure, None);
        assert!(!config.aspiration);
        assert_eq!(config.neighborhood, NeighborhoodKind::Swap);
        assert!(config.seed.is_none());
        assert_eq!(config.tenure_for(17), 17);
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_max_duration(Duration::from_millis(300))
            .with_tabu_tenure(10)
            .with_aspiration(true)
            .with_neighborhood(NeighborhoodKind::TwoOpt)
            .with_seed(123);

        assert_eq!(config.max_duration, Duration::from_millis(300));
        assert_eq!(config.tenure_for(40), 10);
        assert!(config.aspiration);
        assert_eq!(config.neighborhood, NeighborhoodKind::TwoOpt);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_tabu_config_clamps_tenure() {
        assert_eq!(TabuConfig::default().with_tabu_tenure(0).tabu_tenure, None);

        let literal = TabuConfig {
            tabu_tenure: Some(0),
            ..TabuConfig::default()
        };
        assert_eq!(literal.sanitized().tenure_for(9), 9);
    }

    #[test]
    fn test_tabu_config_clamps_duration() {
        let default = Duration::from_secs_f64(DEFAULT_MAX_SECONDS);
        assert_eq!(TabuConfig::default().with_max_seconds(-1.0).max_duration, default);
        assert_eq!(TabuConfig::default().with_max_seconds(f64::NAN).max_duration, default);
        assert_eq!(TabuConfig::default().with_max_seconds(1e20).max_duration, default);
        assert_eq!(
            TabuConfig::default().with_max_seconds(0.25).max_duration,
            Duration::from_millis(250)
        );
    }
}
