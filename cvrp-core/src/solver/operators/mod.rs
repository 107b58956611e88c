//! This module contains neighborhood operators used by the guided local search.
//!
//! Every operator scans the whole fleet and proposes the single best move of its kind.
//! Gains are evaluated analytically from the edges affected by a move, the move itself is
//! materialized into replacement vehicles only when it is accepted.

#[cfg(test)]
#[path = "../../../tests/unit/solver/operators/operators_test.rs"]
mod operators_test;

use crate::models::Problem;
use crate::models::problem::CustomerId;
use crate::models::solution::{Fleet, PenaltyTable, Vehicle};
use crate::utils::Float;
use std::sync::Arc;

mod cross;
pub use self::cross::Cross;

mod exchange;
pub use self::exchange::Exchange;

mod relocate;
pub use self::relocate::Relocate;

mod two_opt;
pub use self::two_opt::TwoOpt;

/// Specifies behavior of a neighborhood operator.
pub trait NeighborhoodOperator {
    /// Returns operator name.
    fn name(&self) -> &'static str;

    /// Scans current fleet and returns the best improving move, if any. The operator must not
    /// keep any state between calls.
    fn propose(&self, search_ctx: &SearchContext) -> Option<Proposal>;
}

/// Returns operators in their priority order: relocate, exchange, 2-opt, cross.
pub fn create_default_operators() -> Vec<Arc<dyn NeighborhoodOperator + Send + Sync>> {
    vec![Arc::new(Relocate), Arc::new(Exchange), Arc::new(TwoOpt), Arc::new(Cross)]
}

/// A read-only view on the search state which is shared by all operators.
pub struct SearchContext<'a> {
    /// A problem definition.
    pub problem: &'a Problem,
    /// A current fleet.
    pub fleet: &'a Fleet,
    /// Current edge penalties.
    pub penalties: &'a PenaltyTable,
    /// A penalty weight.
    pub lambda: Float,
    /// A minimum augmented gain for a move to be considered as improving.
    pub epsilon: Float,
}

/// A cost gain of a move: how much cost goes down when the move is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gain {
    /// A gain in penalty augmented cost.
    pub augmented: Float,
    /// A gain in raw (distance) cost.
    pub raw: Float,
}

/// A move proposed by some operator.
#[derive(Clone, Debug, PartialEq)]
pub struct Proposal {
    /// An expected cost gain.
    pub gain: Gain,
    /// A move descriptor.
    pub change: Move,
}

/// Describes a move in terms of vehicle indices and tour positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Moves a customer from `from` vehicle at `from_pos` right after `to_pos` of `to` vehicle.
    Relocate {
        /// A source vehicle.
        from: usize,
        /// A position of the moved customer.
        from_pos: usize,
        /// A target vehicle.
        to: usize,
        /// A position after which the customer is inserted.
        to_pos: usize,
    },
    /// Swaps two customers of different vehicles.
    Exchange {
        /// A first vehicle.
        first: usize,
        /// A customer position in the first vehicle.
        first_pos: usize,
        /// A second vehicle.
        second: usize,
        /// A customer position in the second vehicle.
        second_pos: usize,
    },
    /// Reverses a tour path within one vehicle.
    TwoOpt {
        /// A vehicle.
        vehicle: usize,
        /// A start position of the first removed edge.
        t1: usize,
        /// A start position of the second removed edge.
        t3: usize,
    },
    /// Exchanges tour tails of two vehicles.
    Cross {
        /// A first vehicle.
        first: usize,
        /// A last kept position in the first vehicle.
        first_cut: usize,
        /// A second vehicle.
        second: usize,
        /// A last kept position in the second vehicle.
        second_cut: usize,
    },
}

impl Move {
    /// Creates replacement vehicles which correspond to the move applied to the fleet.
    pub fn materialize(&self, problem: &Problem, fleet: &Fleet) -> Vec<Vehicle> {
        match *self {
            Move::Relocate { from, from_pos, to, to_pos } => {
                relocate::materialize(problem, fleet, (from, from_pos), (to, to_pos))
            }
            Move::Exchange { first, first_pos, second, second_pos } => {
                exchange::materialize(problem, fleet, (first, first_pos), (second, second_pos))
            }
            Move::TwoOpt { vehicle, t1, t3 } => two_opt::materialize(problem, fleet, vehicle, t1, t3),
            Move::Cross { first, first_cut, second, second_cut } => {
                cross::materialize(problem, fleet, (first, first_cut), (second, second_cut))
            }
        }
    }
}

impl SearchContext<'_> {
    /// Evaluates a gain of replacing `removed` edges with `added` ones.
    #[inline]
    pub fn gain(&self, removed: &[(CustomerId, CustomerId)], added: &[(CustomerId, CustomerId)]) -> Gain {
        let (removed_raw, removed_augmented) = self.edges_cost(removed);
        let (added_raw, added_augmented) = self.edges_cost(added);

        Gain { augmented: removed_augmented - added_augmented, raw: removed_raw - added_raw }
    }

    #[inline]
    fn edges_cost(&self, edges: &[(CustomerId, CustomerId)]) -> (Float, Float) {
        let distances = self.problem.distances();
        edges.iter().fold((0., 0.), |(raw, augmented), &(from, to)| {
            let distance = distances.distance(from, to);
            (raw + distance, augmented + distance + self.lambda * self.penalties.get(from, to) as Float)
        })
    }

    /// Returns pairs of different vehicles in enumeration order.
    pub(crate) fn vehicle_pairs(&self) -> impl Iterator<Item = (&Vehicle, &Vehicle)> + '_ {
        let vehicles = self.fleet.vehicles();
        vehicles.iter().flat_map(move |a| vehicles.iter().filter(move |b| a.index() != b.index()).map(move |b| (a, b)))
    }
}

/// A margin by which a later candidate's gain must exceed the current best one. Gains of
/// equivalent moves are summed over edges in different order, so they can differ in the last bits.
pub(crate) const GAIN_TOLERANCE: Float = 1E-9;

/// Checks whether the candidate gain is strictly better than the best one, beyond rounding noise.
#[inline]
pub(crate) fn is_better_gain(candidate: Float, best: Float) -> bool {
    candidate > best + GAIN_TOLERANCE
}

/// Keeps the first best proposal seen: a later one replaces it only with strictly greater
/// augmented gain.
#[derive(Default)]
pub(crate) struct BestProposal {
    best: Option<Proposal>,
}

impl BestProposal {
    #[inline]
    pub fn accept(&mut self, gain: Gain, change: impl FnOnce() -> Move) {
        if self.best.as_ref().is_none_or(|best| is_better_gain(gain.augmented, best.gain.augmented)) {
            self.best = Some(Proposal { gain, change: change() });
        }
    }

    pub fn finish(self, epsilon: Float) -> Option<Proposal> {
        self.best.filter(|proposal| proposal.gain.augmented >= epsilon)
    }
}
