use super::*;
use crate::helpers::models::*;
use crate::helpers::solver::{create_greedy_state, create_search};

fn get_best_cost(search: &GuidedLocalSearch, state: &mut SearchState, iterations: usize) -> Float {
    (0..iterations).fold(state.raw_cost(), |best, _| match search.step(state) {
        StepOutcome::Moved { .. } => best.min(state.raw_cost()),
        StepOutcome::Diversified { .. } => best,
    })
}

parameterized_test! {can_solve_unit_square_with_any_depot_corner, depot_corner, {
    can_solve_unit_square_with_any_depot_corner_impl(depot_corner);
}}

can_solve_unit_square_with_any_depot_corner! {
    case_01: 0,
    case_02: 1,
    case_03: 2,
    case_04: 3,
}

fn can_solve_unit_square_with_any_depot_corner_impl(depot_corner: usize) {
    let problem = create_square_problem(depot_corner);
    let search = create_search(problem.clone());
    let mut state = create_greedy_state(&problem);

    let best_cost = get_best_cost(&search, &mut state, 1000);

    assert_close!(best_cost, 4.);
}

#[test]
fn can_keep_capacity_and_coverage_on_every_iteration() {
    let problem = create_line_problem(&[3, 3, 2, 2], 2, 5);
    let search = create_search(problem.clone());
    let mut state = create_greedy_state(&problem);

    for _ in 0..500 {
        search.step(&mut state);

        assert_eq!(check_fleet(&problem, state.fleet()), Ok(()));
        assert!(state.fleet().vehicles().iter().all(|vehicle| vehicle.load() <= 5));
    }
}

#[test]
fn can_only_diversify_single_customer_problem() {
    let problem = create_line_problem(&[1], 1, 5);
    let search = create_search(problem.clone());
    let mut state = create_greedy_state(&problem);
    let initial_fleet = state.fleet().clone();

    let mut augmented_cost = state.augmented_cost();
    for iteration in 0..20 {
        let outcome = search.step(&mut state);

        let StepOutcome::Diversified { lambda_initialized, injection } = outcome else {
            panic!("unexpected move at {iteration}");
        };
        assert_eq!(lambda_initialized, iteration == 0);
        assert_eq!(injection.edges, vec![(0, 1)]);
        assert!(state.augmented_cost() > augmented_cost);
        assert_eq!(state.raw_cost(), 2.);
        assert_eq!(state.fleet(), &initial_fleet);
        assert!(state.has_consistent_costs(&problem));

        augmented_cost = state.augmented_cost();
    }

    assert_close!(state.lambda(), 0.1);
    assert_eq!(state.penalties().get(0, 1), 20);
    assert_close!(state.augmented_cost(), 2. + 20. * 2. * 0.1);
}

#[test]
fn can_keep_lambda_zero_when_no_vehicle_is_used() {
    let problem = create_problem(&[(0, 0., 0.)], 2, 5);
    let search = create_search(problem.clone());
    let mut state = create_greedy_state(&problem);

    let outcome = search.step(&mut state);

    assert!(matches!(outcome, StepOutcome::Diversified { lambda_initialized: false, .. }));
    assert_eq!(state.lambda(), 0.);
    assert_eq!(state.augmented_cost(), 0.);
}

parameterized_test! {can_keep_running_costs_consistent, seed, {
    can_keep_running_costs_consistent_impl(seed);
}}

can_keep_running_costs_consistent! {
    case_01: 11,
    case_02: 12,
    case_03: 13,
}

fn can_keep_running_costs_consistent_impl(seed: u64) {
    let problem = create_random_problem(seed, 15, 10);
    let search = create_search(problem.clone());
    let mut state = create_greedy_state(&problem);

    let mut penalty_total = 0;
    let mut has_diversified = false;
    for _ in 0..1000 {
        let outcome = search.step(&mut state);

        assert!(state.has_consistent_costs(&problem));
        assert_eq!(check_fleet(&problem, state.fleet()), Ok(()));
        assert!(state.penalties().total() >= penalty_total);
        penalty_total = state.penalties().total();

        if let StepOutcome::Diversified { injection, .. } = outcome {
            has_diversified = true;
            assert!(state.lambda() > 0.);
            assert!(!injection.edges.is_empty());
        }
    }

    assert!(has_diversified);
}

#[test]
fn can_reproduce_search_trajectory() {
    let problem = create_random_problem(42, 20, 15);
    let search = create_search(problem.clone());

    let run = || {
        let mut state = create_greedy_state(&problem);
        (0..300).map(|_| search.step(&mut state)).collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}
