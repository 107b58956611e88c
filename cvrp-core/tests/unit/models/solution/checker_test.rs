use super::*;
use crate::helpers::models::{create_line_problem, create_vehicle};
use crate::models::solution::Vehicle;

#[test]
fn can_accept_valid_fleet() {
    let problem = create_line_problem(&[1, 2, 3], 2, 4);
    let fleet = Fleet::new(vec![create_vehicle(&problem, 0, vec![3]), create_vehicle(&problem, 1, vec![2, 1])]);

    assert_eq!(check_fleet(&problem, &fleet), Ok(()));
}

#[test]
fn can_detect_wrong_vehicle_amount() {
    let problem = create_line_problem(&[1], 2, 4);
    let fleet = Fleet::new(vec![create_vehicle(&problem, 0, vec![1])]);

    assert_eq!(check_fleet(&problem, &fleet), Err("expected 2 vehicles, got 1".into()));
}

#[test]
fn can_detect_wrong_vehicle_index_and_capacity() {
    let problem = create_line_problem(&[1, 2], 2, 4);
    let fleet = Fleet::new(vec![create_vehicle(&problem, 1, vec![1, 2]), Vehicle::new(0, 3)]);

    let err = check_fleet(&problem, &fleet).expect_err("invalid fleet is accepted").to_string();

    assert!(err.contains("vehicle at 0 has index 1"), "{err}");
    assert!(err.contains("vehicle at 1 has index 0"), "{err}");
    assert!(err.contains("vehicle 1 has capacity 3"), "{err}");
}

#[test]
fn can_collect_all_errors() {
    let problem = create_line_problem(&[2, 2, 1], 2, 3);
    let fleet = Fleet::new(vec![create_vehicle(&problem, 0, vec![1, 2]), create_vehicle(&problem, 1, vec![2])]);

    let result = check_fleet(&problem, &fleet);

    assert_eq!(
        result,
        Err("vehicle 0 load 4 exceeds capacity 3, customer 2 is served 2 time(s), customer 3 is served 0 time(s)"
            .into())
    );
}
