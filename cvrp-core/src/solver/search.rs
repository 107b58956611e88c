#[cfg(test)]
#[path = "../../tests/unit/solver/search_test.rs"]
mod search_test;

use crate::models::Problem;
use crate::models::solution::{Fleet, PenaltyTable, check_fleet};
use crate::solver::arbiter::MoveArbiter;
use crate::solver::injector::{PenaltyInjection, estimate_lambda, inject_penalties};
use crate::solver::operators::{Proposal, SearchContext};
use crate::solver::GlsConfig;
use crate::utils::Float;
use std::sync::Arc;

/// Keeps the mutable state of the search: the current fleet, penalties and running costs.
pub struct SearchState {
    fleet: Fleet,
    penalties: PenaltyTable,
    lambda: Float,
    raw_cost: Float,
    augmented_cost: Float,
}

impl SearchState {
    /// Creates a new search state from the initial fleet.
    pub fn new(problem: &Problem, fleet: Fleet) -> Self {
        let penalties = PenaltyTable::new(problem.size());
        let raw_cost = fleet.raw_cost(problem);
        let augmented_cost = fleet.augmented_cost(problem, &penalties, 0.);

        Self { fleet, penalties, lambda: 0., raw_cost, augmented_cost }
    }

    /// Returns the current fleet.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Returns edge penalties.
    pub fn penalties(&self) -> &PenaltyTable {
        &self.penalties
    }

    /// Returns the penalty weight, zero if it is not initialized yet.
    pub fn lambda(&self) -> Float {
        self.lambda
    }

    /// Returns the running raw cost.
    pub fn raw_cost(&self) -> Float {
        self.raw_cost
    }

    /// Returns the running augmented cost.
    pub fn augmented_cost(&self) -> Float {
        self.augmented_cost
    }

    /// Returns a read-only view for operators.
    pub fn context<'a>(&'a self, problem: &'a Problem, epsilon: Float) -> SearchContext<'a> {
        SearchContext { problem, fleet: &self.fleet, penalties: &self.penalties, lambda: self.lambda, epsilon }
    }

    /// Applies an accepted proposal replacing affected vehicles and updating running costs.
    pub fn apply(&mut self, problem: &Problem, proposal: &Proposal) {
        proposal.change.materialize(problem, &self.fleet).into_iter().for_each(|vehicle| self.fleet.replace(vehicle));

        self.raw_cost -= proposal.gain.raw;
        self.augmented_cost -= proposal.gain.augmented;

        debug_assert!(check_fleet(problem, &self.fleet).is_ok(), "{:?}", check_fleet(problem, &self.fleet));
        debug_assert!(self.has_consistent_costs(problem));
    }

    /// Initializes lambda once, returns true if it was initialized by this call.
    pub fn ensure_lambda(&mut self, alpha: Float) -> bool {
        if self.lambda != 0. {
            return false;
        }

        self.lambda = estimate_lambda(alpha, self.raw_cost, &self.fleet);

        self.lambda != 0.
    }

    /// Penalizes edges with maximum utility.
    pub fn diversify(&mut self, problem: &Problem) -> PenaltyInjection {
        let injection = inject_penalties(problem, &self.fleet, &mut self.penalties, self.lambda);
        self.augmented_cost += injection.augmented_increase;

        debug_assert!(self.has_consistent_costs(problem));

        injection
    }

    /// Checks that running costs match costs recomputed from scratch.
    pub fn has_consistent_costs(&self, problem: &Problem) -> bool {
        let tolerance = |value: Float| 1E-6 * value.abs().max(1.);

        let raw_cost = self.fleet.raw_cost(problem);
        let augmented_cost = self.fleet.augmented_cost(problem, &self.penalties, self.lambda);

        (raw_cost - self.raw_cost).abs() <= tolerance(raw_cost)
            && (augmented_cost - self.augmented_cost).abs() <= tolerance(augmented_cost)
    }
}

/// An outcome of a single search iteration.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// A move proposed by the operator with given index was applied.
    Moved {
        /// An operator index.
        operator: usize,
        /// An applied proposal.
        proposal: Proposal,
    },
    /// No improving move was found, penalties were injected.
    Diversified {
        /// True if lambda was initialized within this step.
        lambda_initialized: bool,
        /// Injection details.
        injection: PenaltyInjection,
    },
}

/// Runs guided local search iterations: the best move among all operators is applied,
/// when there is none, the penalty landscape is changed.
pub struct GuidedLocalSearch {
    problem: Arc<Problem>,
    arbiter: MoveArbiter,
    alpha: Float,
    epsilon: Float,
}

impl GuidedLocalSearch {
    /// Creates a new instance of `GuidedLocalSearch`.
    pub fn new(problem: Arc<Problem>, arbiter: MoveArbiter, config: &GlsConfig) -> Self {
        Self { problem, arbiter, alpha: config.alpha, epsilon: config.epsilon }
    }

    /// Returns the problem.
    pub fn problem(&self) -> &Problem {
        self.problem.as_ref()
    }

    /// Returns the move arbiter.
    pub fn arbiter(&self) -> &MoveArbiter {
        &self.arbiter
    }

    /// Performs a single iteration.
    pub fn step(&self, state: &mut SearchState) -> StepOutcome {
        let selection = self.arbiter.select(&state.context(self.problem.as_ref(), self.epsilon));

        match selection {
            Some(selection) => {
                state.apply(self.problem.as_ref(), &selection.proposal);
                StepOutcome::Moved { operator: selection.operator, proposal: selection.proposal }
            }
            None => {
                let lambda_initialized = state.ensure_lambda(self.alpha);
                let injection = state.diversify(self.problem.as_ref());

                StepOutcome::Diversified { lambda_initialized, injection }
            }
        }
    }
}
