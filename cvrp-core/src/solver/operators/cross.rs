use super::*;
use crate::models::problem::Demand;
use crate::models::solution::Tour;

/// Exchanges tails of two different vehicles' tours, also known as 2-opt*.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cross;

impl NeighborhoodOperator for Cross {
    fn name(&self) -> &'static str {
        "cross"
    }

    fn propose(&self, search_ctx: &SearchContext) -> Option<Proposal> {
        let problem = search_ctx.problem;
        let tail_demands =
            search_ctx.fleet.vehicles().iter().map(|vehicle| get_tail_demands(problem, vehicle.tour())).collect::<Vec<_>>();

        let mut best = BestProposal::default();

        for (vehicle_a, vehicle_b) in search_ctx.vehicle_pairs() {
            let (tour_a, tour_b) = (vehicle_a.tour(), vehicle_b.tour());
            let (tails_a, tails_b) = (&tail_demands[vehicle_a.index()], &tail_demands[vehicle_b.index()]);

            for cut_a in 0..tour_a.len() {
                let demand_a = tails_a[cut_a + 1];
                let (last_a, next_a) = (tour_a.customer_at(cut_a), tour_a.successor(cut_a));

                for cut_b in 0..tour_b.len() {
                    let demand_b = tails_b[cut_b + 1];

                    if vehicle_a.available() + demand_a < demand_b || vehicle_b.available() + demand_b < demand_a {
                        continue;
                    }

                    let (last_b, next_b) = (tour_b.customer_at(cut_b), tour_b.successor(cut_b));

                    let gain = search_ctx.gain(&[(last_a, next_a), (last_b, next_b)], &[(last_a, next_b), (last_b, next_a)]);

                    best.accept(gain, || Move::Cross {
                        first: vehicle_a.index(),
                        first_cut: cut_a,
                        second: vehicle_b.index(),
                        second_cut: cut_b,
                    });
                }
            }
        }

        best.finish(search_ctx.epsilon)
    }
}

/// Returns demand of customers starting from each position till the end of the tour,
/// the last element is always zero.
fn get_tail_demands(problem: &Problem, tour: &Tour) -> Vec<Demand> {
    let mut demands = vec![0; tour.len() + 1];
    for position in (1..tour.len()).rev() {
        demands[position] = demands[position + 1] + problem.demand(tour.customer_at(position));
    }

    demands
}

pub(super) fn materialize(
    problem: &Problem,
    fleet: &Fleet,
    (first, first_cut): (usize, usize),
    (second, second_cut): (usize, usize),
) -> Vec<Vehicle> {
    let mut vehicle_a = fleet.vehicles()[first].clone();
    let mut vehicle_b = fleet.vehicles()[second].clone();

    let tail_b = vehicle_b.tour().tail(second_cut + 1).collect::<Vec<_>>();
    let tail_a = vehicle_a.update_tour(problem, |tour| tour.splice_tail(first_cut, tail_b));
    vehicle_b.update_tour(problem, |tour| tour.splice_tail(second_cut, tail_a));

    vec![vehicle_a, vehicle_b]
}
