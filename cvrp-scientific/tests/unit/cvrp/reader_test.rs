use super::*;
use crate::helpers::VRP_5_4_1;

#[test]
fn can_read_problem() {
    let problem = VRP_5_4_1.to_string().read_cvrp().expect("cannot read problem");

    assert_eq!(problem.size(), 5);
    assert_eq!(problem.vehicles(), 4);
    assert_eq!(problem.capacity(), 10);
    assert_eq!(problem.total_demand(), 12);
    assert_eq!(problem.customers()[2], Customer::new(3, -10., 10.));
    assert_eq!(problem.distances().distance(1, 2), 10.);
}

#[test]
fn can_read_problem_from_buf_reader_with_extra_spaces() {
    let input = "3 1 5\r\n\r\n 0  1.5 2.5 \n2 0 0\n3 3 4\n\n";

    let problem = BufReader::new(input.as_bytes()).read_cvrp().expect("cannot read problem");

    assert_eq!(problem.size(), 3);
    assert_eq!(problem.customers()[0], Customer::new(0, 1.5, 2.5));
    assert_eq!(problem.distances().distance(1, 2), 5.);
}

parameterized_test! {can_reject_malformed_problem, (input, expected), {
    can_reject_malformed_problem_impl(input, expected);
}}

can_reject_malformed_problem! {
    case_01_empty: ("", "header line is missing"),
    case_02_short_header: ("3 1\n", "line 1: vehicle capacity is missing"),
    case_03_long_header: ("3 1 5 7\n", "line 1: unexpected token '7'"),
    case_04_bad_size: ("x 1 5\n", "line 1: cannot parse customers amount from 'x'"),
    case_05_missing_customers: ("3 1 5\n0 0 0\n1 1 1\n", "expected 3 customers, got 2"),
    case_06_extra_customers: ("2 1 5\n0 0 0\n1 1 1\n1 2 2\n", "line 4: expected 2 customers, got more"),
    case_07_bad_coordinate: ("2 1 5\n0 0 0\n1 1 y\n", "line 3: cannot parse y from 'y'"),
    case_08_bad_demand: ("2 1 5\n0 0 0\n1.5 1 1\n", "line 3: cannot parse demand from '1.5'"),
    case_09_invalid_problem: ("2 1 5\n0 0 0\n6 1 1\n", "customer 1 has demand 6"),
    case_10_no_vehicles: ("2 0 5\n0 0 0\n1 1 1\n", "at least one vehicle"),
}

fn can_reject_malformed_problem_impl(input: &str, expected: &str) {
    let err = input.to_string().read_cvrp().err().map(|err| err.to_string()).expect("malformed problem is accepted");

    assert!(err.contains(expected), "unexpected error: {err}");
}
