use crate::utils::Float;

/// Keeps guided local search parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GlsConfig {
    /// A scale factor used to derive penalty weight (lambda) from the cost of the first local optimum.
    pub alpha: Float,
    /// A minimum augmented gain for a move to be considered improving.
    pub epsilon: Float,
    /// A maximum amount of search iterations.
    pub max_iterations: usize,
    /// Specifies how often the search progress is logged. No progress logging when none.
    pub log_best: Option<usize>,
}

impl Default for GlsConfig {
    fn default() -> Self {
        Self { alpha: 0.1, epsilon: 1E-6, max_iterations: 10_000_000, log_best: Some(1000) }
    }
}
