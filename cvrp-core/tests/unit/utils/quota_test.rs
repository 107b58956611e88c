use super::*;
use std::sync::atomic::{AtomicBool, Ordering};

struct FlagQuota(AtomicBool);

impl Quota for FlagQuota {
    fn is_reached(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[test]
fn can_detect_time_quota() {
    assert!(!TimeQuota::new(60.).is_reached());
    assert!(TimeQuota::new(-1.).is_reached());
}

#[test]
fn can_combine_quotas() {
    let flag = Arc::new(FlagQuota(AtomicBool::new(false)));
    let quotas: Vec<Arc<dyn Quota + Send + Sync>> = vec![Arc::new(TimeQuota::new(60.)), flag.clone()];
    let quota = CompositeQuota::new(quotas);

    assert!(!quota.is_reached());

    flag.0.store(true, Ordering::Relaxed);
    assert!(quota.is_reached());
}
