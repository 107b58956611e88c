use super::*;

#[test]
fn can_create_interruption_quota_many_times() {
    let first = create_interruption_quota().expect("cannot create first quota");
    let second = create_interruption_quota().expect("cannot create second quota");

    assert!(!first.is_reached());
    assert!(!second.is_reached());
}

#[test]
fn can_reach_quota_when_flag_is_set() {
    let should_interrupt = Arc::new(AtomicBool::new(false));
    let quota = InterruptionQuota { should_interrupt: should_interrupt.clone() };
    assert!(!quota.is_reached());

    should_interrupt.store(true, Ordering::Relaxed);

    assert!(quota.is_reached());
}
