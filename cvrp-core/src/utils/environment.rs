use crate::utils::Quota;
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// An optional execution quota checked once per search iteration.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(quota: Option<Arc<dyn Quota + Send + Sync>>, logger: InfoLogger) -> Self {
        Self { quota, logger }
    }

    /// Creates an environment which swallows all log messages.
    pub fn silent() -> Self {
        Self { quota: None, logger: Arc::new(|_| {}) }
    }

    /// Checks whether the quota, if any, is reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(None, Arc::new(|msg| println!("{msg}")))
    }
}
