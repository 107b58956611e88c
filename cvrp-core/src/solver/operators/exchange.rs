use super::*;

/// Swaps two customers served by different vehicles keeping their positions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exchange;

impl NeighborhoodOperator for Exchange {
    fn name(&self) -> &'static str {
        "exchange"
    }

    fn propose(&self, search_ctx: &SearchContext) -> Option<Proposal> {
        let problem = search_ctx.problem;
        let mut best = BestProposal::default();

        for (vehicle_a, vehicle_b) in search_ctx.vehicle_pairs() {
            let (tour_a, tour_b) = (vehicle_a.tour(), vehicle_b.tour());

            for pos_a in 1..tour_a.len() {
                let customer_a = tour_a.customer_at(pos_a);
                let demand_a = problem.demand(customer_a);
                let (prev_a, next_a) = (tour_a.predecessor(pos_a), tour_a.successor(pos_a));

                for pos_b in 1..tour_b.len() {
                    let customer_b = tour_b.customer_at(pos_b);
                    let demand_b = problem.demand(customer_b);

                    if vehicle_a.available() + demand_a < demand_b || vehicle_b.available() + demand_b < demand_a {
                        continue;
                    }

                    let (prev_b, next_b) = (tour_b.predecessor(pos_b), tour_b.successor(pos_b));

                    let gain = search_ctx.gain(
                        &[(prev_a, customer_a), (customer_a, next_a), (prev_b, customer_b), (customer_b, next_b)],
                        &[(prev_a, customer_b), (customer_b, next_a), (prev_b, customer_a), (customer_a, next_b)],
                    );

                    best.accept(gain, || Move::Exchange {
                        first: vehicle_a.index(),
                        first_pos: pos_a,
                        second: vehicle_b.index(),
                        second_pos: pos_b,
                    });
                }
            }
        }

        best.finish(search_ctx.epsilon)
    }
}

pub(super) fn materialize(
    problem: &Problem,
    fleet: &Fleet,
    (first, first_pos): (usize, usize),
    (second, second_pos): (usize, usize),
) -> Vec<Vehicle> {
    let mut vehicle_a = fleet.vehicles()[first].clone();
    let mut vehicle_b = fleet.vehicles()[second].clone();

    let customer_b = vehicle_b.tour().customer_at(second_pos);
    let customer_a = vehicle_a.update_tour(problem, |tour| tour.replace_at(first_pos, customer_b));
    vehicle_b.update_tour(problem, |tour| tour.replace_at(second_pos, customer_a));

    vec![vehicle_a, vehicle_b]
}
