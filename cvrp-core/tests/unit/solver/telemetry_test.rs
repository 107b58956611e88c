use super::*;
use crate::helpers::models::create_line_problem;
use crate::helpers::solver::create_greedy_state;
use crate::solver::PenaltyInjection;
use crate::solver::operators::{Gain, Move, Proposal};
use std::sync::{Arc, Mutex};

fn create_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |message: &str| messages.lock().expect("cannot lock").push(message.to_string()))
    };

    (logger, messages)
}

fn create_moved(operator: usize) -> StepOutcome {
    StepOutcome::Moved {
        operator,
        proposal: Proposal { gain: Gain { augmented: 1., raw: 1. }, change: Move::TwoOpt { vehicle: 0, t1: 0, t3: 2 } },
    }
}

fn create_diversified(lambda_initialized: bool) -> StepOutcome {
    StepOutcome::Diversified {
        lambda_initialized,
        injection: PenaltyInjection { utility: 1., edges: vec![(0, 1)], augmented_increase: 0. },
    }
}

#[test]
fn can_collect_metrics() {
    let problem = create_line_problem(&[1, 1], 1, 5);
    let state = create_greedy_state(&problem);
    let mut telemetry = Telemetry::new(None, Some(1000), 10, vec!["relocate", "exchange", "2-opt", "cross"]);

    telemetry.on_start(&state, 1, 2);
    telemetry.on_step(0, &create_moved(2), &state, 4.);
    telemetry.on_best(0, 4.);
    telemetry.on_step(1, &create_diversified(true), &state, 4.);
    telemetry.on_step(2, &create_moved(0), &state, 4.);
    telemetry.on_step(3, &create_moved(2), &state, 4.);
    telemetry.on_step(4, &create_diversified(false), &state, 4.);
    let metrics = telemetry.on_result(&state, 4., false);

    assert_eq!(metrics.iterations, 5);
    assert_eq!(metrics.accepted, vec![("relocate", 1), ("exchange", 0), ("2-opt", 2), ("cross", 0)]);
    assert_eq!(metrics.total_accepted(), 3);
    assert_eq!(metrics.penalty_rounds, 2);
    assert_eq!(metrics.improvements, 1);
    assert_eq!(metrics.lambda, 0.);
}

#[test]
fn can_log_progress_every_log_best_iterations() {
    let problem = create_line_problem(&[1, 1], 1, 5);
    let state = create_greedy_state(&problem);
    let (logger, messages) = create_logger();
    let mut telemetry = Telemetry::new(Some(logger), Some(2), 5, vec!["relocate"]);

    (0..5).for_each(|iteration| telemetry.on_step(iteration, &create_moved(0), &state, 4.));

    let messages = messages.lock().expect("cannot lock").clone();
    assert_eq!(
        messages,
        vec![
            "[Step 2/5] [Lambda 0.000000] [Cost 4.000000] [Augmented Cost 4.000000] [Best Cost 4.000000]",
            "[Step 4/5] [Lambda 0.000000] [Cost 4.000000] [Augmented Cost 4.000000] [Best Cost 4.000000]",
        ]
    );
}

#[test]
fn can_log_lambda_initialization_and_summary() {
    let problem = create_line_problem(&[1, 1], 1, 5);
    let state = create_greedy_state(&problem);
    let (logger, messages) = create_logger();
    let mut telemetry = Telemetry::new(Some(logger), None, 5, vec!["relocate"]);

    telemetry.on_step(0, &create_diversified(true), &state, 4.);
    telemetry.on_result(&state, 4., true);

    let messages = messages.lock().expect("cannot lock").clone();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "[Step 1] lambda initialized: 0.000000");
    assert!(messages[1].contains("search is interrupted after 1 iterations, best cost: 4.000000"), "{}", messages[1]);
    assert!(messages[1].contains("accepted moves: [relocate: 0]"), "{}", messages[1]);
}

#[test]
fn can_log_one_based_step_numbers() {
    let problem = create_line_problem(&[1, 1], 1, 5);
    let state = create_greedy_state(&problem);
    let (logger, messages) = create_logger();
    let mut telemetry = Telemetry::new(Some(logger), Some(5), 5, vec!["relocate"]);

    telemetry.on_best(4, 3.5);
    telemetry.on_step(4, &create_moved(0), &state, 3.5);

    let messages = messages.lock().expect("cannot lock").clone();
    assert_eq!(
        messages,
        vec![
            "[Step 5] new best cost: 3.500000",
            "[Step 5/5] [Lambda 0.000000] [Cost 4.000000] [Augmented Cost 4.000000] [Best Cost 3.500000]",
        ]
    );
}
