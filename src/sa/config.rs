//! SA configuration.

use std::time::Duration;

use super::types::AcceptanceRule;
use crate::solver::{budget_from_secs, DEFAULT_MAX_SECONDS};

/// Cooling factor used when the configured one lies outside (0, 1).
pub const DEFAULT_COOLING_FACTOR: f64 = 0.999;

/// Number of trial swaps used to calibrate the initial temperature.
pub const DEFAULT_CALIBRATION_SAMPLES: usize = 50;

/// Acceptance probability a typical uphill move gets at the initial
/// temperature.
pub const DEFAULT_TARGET_ACCEPTANCE: f64 = 0.98;

/// Configuration for [`SimulatedAnnealing`](super::SimulatedAnnealing).
///
/// Out-of-range numeric inputs are clamped to the documented defaults,
/// never rejected:
///
/// | field | valid | default |
/// |---|---|---|
/// | `cooling_factor` | (0, 1) | [`DEFAULT_COOLING_FACTOR`] |
/// | `max_duration` (via seconds) | finite, ≥ 0 | [`DEFAULT_MAX_SECONDS`] |
/// | `calibration_samples` | ≥ 1 | [`DEFAULT_CALIBRATION_SAMPLES`] |
/// | `target_acceptance` | (0, 1) | [`DEFAULT_TARGET_ACCEPTANCE`] |
///
/// # Examples
///
/// ```
/// use atsp_metaheur::sa::{AcceptanceRule, SaConfig, DEFAULT_COOLING_FACTOR};
///
/// let config = SaConfig::default()
///     .with_cooling_factor(0.95)
///     .with_max_seconds(1.0)
///     .with_acceptance(AcceptanceRule::Metropolis)
///     .with_seed(42);
/// assert_eq!(config.cooling_factor, 0.95);
///
/// let clamped = SaConfig::default().with_cooling_factor(1.5);
/// assert_eq!(clamped.cooling_factor, DEFAULT_COOLING_FACTOR);
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Temperature multiplier applied once per proposal, in (0, 1).
    pub cooling_factor: f64,

    /// Wall-clock budget of one solve.
    pub max_duration: Duration,

    /// Acceptance rule of the annealing loop.
    pub acceptance: AcceptanceRule,

    /// Trial swaps averaged to calibrate the initial temperature.
    pub calibration_samples: usize,

    /// Acceptance probability of an average uphill move at `T0`, in (0, 1).
    pub target_acceptance: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            cooling_factor: DEFAULT_COOLING_FACTOR,
            max_duration: Duration::from_secs_f64(DEFAULT_MAX_SECONDS),
            acceptance: AcceptanceRule::default(),
            calibration_samples: DEFAULT_CALIBRATION_SAMPLES,
            target_acceptance: DEFAULT_TARGET_ACCEPTANCE,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self.sanitized()
    }

    pub fn with_max_duration(mut self, duration: Duration) -> Self {
        self.max_duration = duration;
        self
    }

    pub fn with_max_seconds(mut self, secs: f64) -> Self {
        self.max_duration = budget_from_secs(secs);
        self
    }

    pub fn with_acceptance(mut self, acceptance: AcceptanceRule) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_calibration_samples(mut self, samples: usize) -> Self {
        self.calibration_samples = samples;
        self.sanitized()
    }

    pub fn with_target_acceptance(mut self, probability: f64) -> Self {
        self.target_acceptance = probability;
        self.sanitized()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Applies the clamp-to-default policy to every field.
    pub fn sanitized(mut self) -> Self {
        if !in_open_unit_interval(self.cooling_factor) {
            tracing::warn!(
                factor = self.cooling_factor,
                default = DEFAULT_COOLING_FACTOR,
                "cooling factor outside (0, 1), using default"
            );
            self.cooling_factor = DEFAULT_COOLING_FACTOR;
        }
        if self.calibration_samples == 0 {
            tracing::warn!(
                default = DEFAULT_CALIBRATION_SAMPLES,
                "zero calibration samples, using default"
            );
            self.calibration_samples = DEFAULT_CALIBRATION_SAMPLES;
        }
        if !in_open_unit_interval(self.target_acceptance) {
            tracing::warn!(
                probability = self.target_acceptance,
                default = DEFAULT_TARGET_ACCEPTANCE,
                "target acceptance outside (0, 1), using default"
            );
            self.target_acceptance = DEFAULT_TARGET_ACCEPTANCE;
        }
        self
    }
}

fn in_open_unit_interval(x: f64) -> bool {
    x > 0.0 && x < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.cooling_factor, DEFAULT_COOLING_FACTOR);
        assert_eq!(config.max_duration, Duration::from_secs(10));
        assert_eq!(config.acceptance, AcceptanceRule::Strict);
        assert_eq!(config.calibration_samples, 50);
        assert!((config.target_acceptance - 0.98).abs() < 1e-12);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_cooling_factor_clamped() {
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let config = SaConfig::default().with_cooling_factor(bad);
            assert_eq!(config.cooling_factor, DEFAULT_COOLING_FACTOR, "factor {bad}");
        }
        assert_eq!(SaConfig::default().with_cooling_factor(0.9).cooling_factor, 0.9);
    }

    #[test]
    fn test_duration_clamped() {
        let default = Duration::from_secs_f64(DEFAULT_MAX_SECONDS);
        assert_eq!(SaConfig::default().with_max_seconds(-2.0).max_duration, default);
        assert_eq!(SaConfig::default().with_max_seconds(f64::NAN).max_duration, default);
        assert_eq!(SaConfig::default().with_max_seconds(1e20).max_duration, default);
        assert_eq!(
            SaConfig::default().with_max_seconds(0.5).max_duration,
            Duration::from_millis(500)
        );
    }

    #[test]
    fn test_calibration_samples_clamped() {
        assert_eq!(
            SaConfig::default().with_calibration_samples(0).calibration_samples,
            DEFAULT_CALIBRATION_SAMPLES
        );
        assert_eq!(
            SaConfig::default().with_calibration_samples(8).calibration_samples,
            8
        );
    }

    #[test]
    fn test_target_acceptance_clamped() {
        for bad in [0.0, 1.0, 2.0, f64::NAN] {
            let config = SaConfig::default().with_target_acceptance(bad);
            assert_eq!(config.target_acceptance, DEFAULT_TARGET_ACCEPTANCE);
        }
    }

    #[test]
    fn test_sanitized_fixes_struct_literal() {
        let config = SaConfig {
            cooling_factor: 3.0,
            calibration_samples: 0,
            ..SaConfig::default()
        }
        .sanitized();
        assert_eq!(config.cooling_factor, DEFAULT_COOLING_FACTOR);
        assert_eq!(config.calibration_samples, DEFAULT_CALIBRATION_SAMPLES);
    }
}
