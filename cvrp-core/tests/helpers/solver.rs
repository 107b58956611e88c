use crate::models::solution::PenaltyTable;
use crate::models::{Fleet, Problem};
use crate::solver::operators::{NeighborhoodOperator, Proposal, SearchContext, create_default_operators};
use crate::solver::{GlsConfig, GuidedLocalSearch, MoveArbiter, SearchState};
use crate::utils::Float;
use std::sync::Arc;

/// Runs the given operator against the fleet with the given penalties.
pub fn propose(
    operator: &dyn NeighborhoodOperator,
    problem: &Problem,
    fleet: &Fleet,
    penalties: &PenaltyTable,
    lambda: Float,
) -> Option<Proposal> {
    operator.propose(&SearchContext { problem, fleet, penalties, lambda, epsilon: 1E-6 })
}

/// Creates a search with default operators and configuration.
pub fn create_search(problem: Arc<Problem>) -> GuidedLocalSearch {
    GuidedLocalSearch::new(problem, MoveArbiter::new(create_default_operators()), &GlsConfig::default())
}

/// Creates a search state with the greedy initial fleet.
pub fn create_greedy_state(problem: &Problem) -> SearchState {
    SearchState::new(problem, Fleet::greedy(problem).expect("cannot create greedy fleet"))
}
