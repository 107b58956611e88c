#[cfg(test)]
#[path = "../../tests/unit/utils/quota_test.rs"]
mod quota_test;

use crate::utils::{Float, Timer};
use std::sync::Arc;

/// Specifies a computational quota for the search.
/// The main purpose is to allow to stop algorithm in reaction to external events such
/// as user cancellation, timer, etc.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A time quota.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }
}

/// A quota which is reached when any of its inner quotas is reached.
pub struct CompositeQuota {
    quotas: Vec<Arc<dyn Quota + Send + Sync>>,
}

impl CompositeQuota {
    /// Creates a new instance of `CompositeQuota`.
    pub fn new(quotas: Vec<Arc<dyn Quota + Send + Sync>>) -> Self {
        Self { quotas }
    }
}

impl Quota for CompositeQuota {
    fn is_reached(&self) -> bool {
        self.quotas.iter().any(|quota| quota.is_reached())
    }
}
