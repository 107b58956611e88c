#[cfg(test)]
#[path = "../../tests/unit/solver/arbiter_test.rs"]
mod arbiter_test;

use crate::solver::operators::{NeighborhoodOperator, Proposal, SearchContext, is_better_gain};
use std::sync::Arc;

/// A proposal selected among all operators.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// An index of the operator which proposed the move.
    pub operator: usize,
    /// A winning proposal.
    pub proposal: Proposal,
}

/// Runs all operators against the same search state and picks the move with the greatest
/// augmented gain. Operators are kept in priority order: on equal gain the earlier one wins.
pub struct MoveArbiter {
    operators: Vec<Arc<dyn NeighborhoodOperator + Send + Sync>>,
}

impl MoveArbiter {
    /// Creates a new instance of `MoveArbiter`.
    pub fn new(operators: Vec<Arc<dyn NeighborhoodOperator + Send + Sync>>) -> Self {
        Self { operators }
    }

    /// Returns operators in priority order.
    pub fn operators(&self) -> &[Arc<dyn NeighborhoodOperator + Send + Sync>] {
        self.operators.as_slice()
    }

    /// Asks every operator for a proposal and returns the best one, or none if no operator
    /// has found an improving move.
    pub fn select(&self, search_ctx: &SearchContext) -> Option<Selection> {
        self.operators
            .iter()
            .enumerate()
            .filter_map(|(operator, op)| op.propose(search_ctx).map(|proposal| Selection { operator, proposal }))
            .fold(None, |best: Option<Selection>, candidate| match best {
                Some(best) if !is_better_gain(candidate.proposal.gain.augmented, best.proposal.gain.augmented) => {
                    Some(best)
                }
                _ => Some(candidate),
            })
    }
}
