//! A module which provides the logic to collect metrics about search execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::solver::search::{SearchState, StepOutcome};
use crate::utils::{Float, InfoLogger, Timer};

/// Encapsulates different measurements regarding search evaluation.
#[derive(Clone, Debug)]
pub struct Metrics {
    /// Search duration in milliseconds.
    pub duration: u128,
    /// Total amount of iterations.
    pub iterations: usize,
    /// Amount of accepted moves per operator, in operator priority order.
    pub accepted: Vec<(&'static str, usize)>,
    /// Amount of penalty injections.
    pub penalty_rounds: usize,
    /// Amount of times the best known solution was improved.
    pub improvements: usize,
    /// A final penalty weight.
    pub lambda: Float,
}

impl Metrics {
    /// Returns total amount of accepted moves.
    pub fn total_accepted(&self) -> usize {
        self.accepted.iter().map(|(_, count)| *count).sum()
    }
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    logger: Option<InfoLogger>,
    log_best: Option<usize>,
    max_iterations: usize,
    time: Timer,
    metrics: Metrics,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(
        logger: Option<InfoLogger>,
        log_best: Option<usize>,
        max_iterations: usize,
        operators: Vec<&'static str>,
    ) -> Self {
        Self {
            logger,
            log_best: log_best.filter(|&log_best| log_best > 0),
            max_iterations,
            time: Timer::start(),
            metrics: Metrics {
                duration: 0,
                iterations: 0,
                accepted: operators.into_iter().map(|name| (name, 0)).collect(),
                penalty_rounds: 0,
                improvements: 0,
                lambda: 0.,
            },
        }
    }

    /// Reports search start.
    pub fn on_start(&mut self, state: &SearchState, vehicles: usize, customers: usize) {
        self.time = Timer::start();
        self.log(
            format!(
                "started guided local search: customers: {customers}, vehicles: {vehicles}, initial cost: {:.6}",
                state.raw_cost()
            )
            .as_str(),
        );
    }

    /// Reports a single iteration.
    pub fn on_step(&mut self, iteration: usize, outcome: &StepOutcome, state: &SearchState, best_cost: Float) {
        let step = iteration + 1;
        self.metrics.iterations = step;

        match outcome {
            StepOutcome::Moved { operator, .. } => {
                if let Some((_, count)) = self.metrics.accepted.get_mut(*operator) {
                    *count += 1;
                }
            }
            StepOutcome::Diversified { lambda_initialized, .. } => {
                self.metrics.penalty_rounds += 1;
                if *lambda_initialized {
                    self.log(format!("[Step {step}] lambda initialized: {:.6}", state.lambda()).as_str());
                }
            }
        }

        if self.log_best.is_some_and(|log_best| step % log_best == 0) {
            self.log(
                format!(
                    "[Step {step}/{}] [Lambda {:.6}] [Cost {:.6}] [Augmented Cost {:.6}] [Best Cost {:.6}]",
                    self.max_iterations,
                    state.lambda(),
                    state.raw_cost(),
                    state.augmented_cost(),
                    best_cost
                )
                .as_str(),
            );
        }
    }

    /// Reports a new best known solution found at the given zero-based iteration.
    pub fn on_best(&mut self, iteration: usize, cost: Float) {
        self.metrics.improvements += 1;
        self.log(format!("[Step {}] new best cost: {cost:.6}", iteration + 1).as_str());
    }

    /// Reports search end and returns collected metrics.
    pub fn on_result(mut self, state: &SearchState, best_cost: Float, is_interrupted: bool) -> Metrics {
        self.metrics.lambda = state.lambda();
        self.metrics.duration = self.time.elapsed_millis();

        let accepted =
            self.metrics.accepted.iter().map(|(name, count)| format!("{name}: {count}")).collect::<Vec<_>>().join(", ");

        self.log(
            format!(
                "[{}s] {} after {} iterations, best cost: {best_cost:.6}, penalty rounds: {}, accepted moves: [{accepted}]",
                self.time.elapsed_secs(),
                if is_interrupted { "search is interrupted" } else { "search is completed" },
                self.metrics.iterations,
                self.metrics.penalty_rounds,
            )
            .as_str(),
        );

        self.metrics
    }

    /// Writes message to the log.
    pub fn log(&self, message: &str) {
        if let Some(logger) = self.logger.as_ref() {
            (logger)(message);
        }
    }
}
