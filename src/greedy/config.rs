//! Greedy constructor configuration.

/// Configuration for [`GreedySolver`](super::GreedySolver).
///
/// # Examples
///
/// ```
/// use atsp_metaheur::greedy::GreedyConfig;
///
/// let config = GreedyConfig::default().with_parallel(true);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyConfig {
    /// Whether to run the start-city trials on the rayon thread pool.
    ///
    /// Only honored when the crate is built with the `parallel` feature.
    /// The result is identical to the sequential scan.
    pub parallel: bool,
}

impl GreedyConfig {
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
