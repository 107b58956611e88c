use super::*;

/// Moves a single customer from one vehicle into the best position of another vehicle.
#[derive(Clone, Copy, Debug, Default)]
pub struct Relocate;

impl NeighborhoodOperator for Relocate {
    fn name(&self) -> &'static str {
        "relocate"
    }

    fn propose(&self, search_ctx: &SearchContext) -> Option<Proposal> {
        let mut best = BestProposal::default();

        for (vehicle_a, vehicle_b) in search_ctx.vehicle_pairs() {
            let (tour_a, tour_b) = (vehicle_a.tour(), vehicle_b.tour());

            for from_pos in 1..tour_a.len() {
                let customer = tour_a.customer_at(from_pos);
                if search_ctx.problem.demand(customer) > vehicle_b.available() {
                    continue;
                }

                let (prev, next) = (tour_a.predecessor(from_pos), tour_a.successor(from_pos));

                for to_pos in 0..tour_b.len() {
                    let (left, right) = (tour_b.customer_at(to_pos), tour_b.successor(to_pos));

                    let gain = search_ctx.gain(
                        &[(prev, customer), (customer, next), (left, right)],
                        &[(prev, next), (left, customer), (customer, right)],
                    );

                    best.accept(gain, || Move::Relocate {
                        from: vehicle_a.index(),
                        from_pos,
                        to: vehicle_b.index(),
                        to_pos,
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
    (from, from_pos): (usize, usize),
    (to, to_pos): (usize, usize),
) -> Vec<Vehicle> {
    let mut vehicle_a = fleet.vehicles()[from].clone();
    let mut vehicle_b = fleet.vehicles()[to].clone();

    let customer = vehicle_a.update_tour(problem, |tour| tour.remove_at(from_pos));
    vehicle_b.update_tour(problem, |tour| tour.insert_after(to_pos, customer));

    vec![vehicle_a, vehicle_b]
}
