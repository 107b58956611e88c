#[cfg(test)]
#[path = "../../tests/unit/solver/injector_test.rs"]
mod injector_test;

use crate::models::Problem;
use crate::models::problem::CustomerId;
use crate::models::solution::{Fleet, PenaltyTable};
use crate::utils::{Float, compare_floats};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// A result of the penalty injection.
#[derive(Clone, Debug, PartialEq)]
pub struct PenaltyInjection {
    /// The maximum edge utility found in the fleet.
    pub utility: Float,
    /// Undirected edges which got their penalty incremented, in order of their appearance.
    pub edges: Vec<(CustomerId, CustomerId)>,
    /// Increase of the augmented cost caused by new penalties.
    pub augmented_increase: Float,
}

/// Estimates penalty weight from the current cost and the amount of edges in used vehicles.
/// Returns zero when no vehicle serves customers.
pub fn estimate_lambda(alpha: Float, raw_cost: Float, fleet: &Fleet) -> Float {
    match fleet.active_edges() {
        0 => 0.,
        edges => alpha * raw_cost / edges as Float,
    }
}

/// Penalizes all edges of the fleet which have maximum utility `distance / (1 + penalty)`.
/// Each such undirected edge gets its penalty incremented by one, the augmented cost grows
/// by `lambda` for every time the edge is traversed in the fleet.
pub fn inject_penalties(
    problem: &Problem,
    fleet: &Fleet,
    penalties: &mut PenaltyTable,
    lambda: Float,
) -> PenaltyInjection {
    let distances = problem.distances();

    let mut utility = Float::NEG_INFINITY;
    let mut selected: Vec<(CustomerId, CustomerId)> = Vec::new();
    // NOTE keeps the amount of directed traversals for each undirected edge
    let mut traversals: FxHashMap<(CustomerId, CustomerId), usize> = FxHashMap::default();

    for (from, to) in fleet.edges() {
        let edge = normalize(from, to);
        *traversals.entry(edge).or_default() += 1;

        let edge_utility = distances.distance(from, to) / (1. + penalties.get(from, to) as Float);

        match compare_floats(edge_utility, utility) {
            Ordering::Greater => {
                utility = edge_utility;
                selected.clear();
                selected.push(edge);
            }
            Ordering::Equal if !selected.contains(&edge) => selected.push(edge),
            _ => {}
        }
    }

    let augmented_increase = selected
        .iter()
        .map(|&(from, to)| {
            penalties.increment(from, to);
            lambda * traversals.get(&(from, to)).copied().unwrap_or_default() as Float
        })
        .sum();

    PenaltyInjection { utility, edges: selected, augmented_increase }
}

fn normalize(from: CustomerId, to: CustomerId) -> (CustomerId, CustomerId) {
    if from <= to { (from, to) } else { (to, from) }
}
