use super::*;
use crate::helpers::models::{create_fleet, create_line_problem};
use std::sync::Mutex;

#[test]
fn can_persist_seed_and_strict_improvements_only() {
    let problem = create_line_problem(&[1, 1], 2, 5);
    let seed = create_fleet(&problem, vec![vec![1], vec![2]]);
    let better = create_fleet(&problem, vec![vec![1, 2], vec![]]);
    let persisted = Arc::new(Mutex::new(Vec::<Float>::new()));
    let observer = {
        let persisted = persisted.clone();
        move |_: &Fleet, cost: Float| -> GenericResult<()> {
            persisted.lock().map_err(|err| err.to_string())?.push(cost);
            Ok(())
        }
    };

    let mut tracker = BestTracker::new(&seed, 6., Some(Arc::new(observer))).expect("cannot create tracker");

    assert!(!tracker.consider_update(&better, 6.).expect("cannot update"));
    assert!(!tracker.consider_update(&better, 7.).expect("cannot update"));
    assert!(tracker.consider_update(&better, 4.).expect("cannot update"));

    assert_eq!(tracker.cost(), 4.);
    assert_eq!(tracker.fleet(), &better);
    assert_eq!(*persisted.lock().expect("cannot lock"), vec![6., 4.]);

    let (fleet, cost) = tracker.into_best();
    assert_eq!(fleet, better);
    assert_eq!(cost, 4.);
}

#[test]
fn can_propagate_observer_error() {
    let problem = create_line_problem(&[1], 1, 5);
    let fleet = create_fleet(&problem, vec![vec![1]]);
    let observer = |_: &Fleet, cost: Float| -> GenericResult<()> {
        if cost < 2. { Err("cannot write solution".into()) } else { Ok(()) }
    };

    let mut tracker = BestTracker::new(&fleet, 2., Some(Arc::new(observer))).expect("cannot create tracker");

    assert_eq!(tracker.consider_update(&fleet, 1.), Err("cannot write solution".into()));
}

#[test]
fn can_track_without_observer() {
    let problem = create_line_problem(&[1], 1, 5);
    let fleet = create_fleet(&problem, vec![vec![1]]);

    let mut tracker = BestTracker::new(&fleet, 2., None).expect("cannot create tracker");

    assert_eq!(tracker.consider_update(&fleet, 1.), Ok(true));
    assert_eq!(tracker.cost(), 1.);
}
