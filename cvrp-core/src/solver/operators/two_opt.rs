use super::*;

/// Implements a classical TSP's two opt exchange within a single vehicle's tour.
/// For algorithm details, see https://en.wikipedia.org/wiki/2-opt
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoOpt;

impl NeighborhoodOperator for TwoOpt {
    fn name(&self) -> &'static str {
        "2-opt"
    }

    fn propose(&self, search_ctx: &SearchContext) -> Option<Proposal> {
        let mut best = BestProposal::default();

        for vehicle in search_ctx.fleet.vehicles() {
            let tour = vehicle.tour();
            let size = tour.len();

            for t1 in 0..size {
                let t2 = (t1 + 1) % size;

                for t3 in 0..size {
                    let t4 = (t3 + 1) % size;

                    if t1 == t3 || t1 == t4 || t2 == t3 || t2 == t4 {
                        continue;
                    }

                    let (c1, c2, c3, c4) =
                        (tour.customer_at(t1), tour.customer_at(t2), tour.customer_at(t3), tour.customer_at(t4));

                    let gain = search_ctx.gain(&[(c1, c2), (c3, c4)], &[(c1, c3), (c2, c4)]);

                    best.accept(gain, || Move::TwoOpt { vehicle: vehicle.index(), t1, t3 });
                }
            }
        }

        best.finish(search_ctx.epsilon)
    }
}

pub(super) fn materialize(problem: &Problem, fleet: &Fleet, vehicle: usize, t1: usize, t3: usize) -> Vec<Vehicle> {
    let mut vehicle = fleet.vehicles()[vehicle].clone();
    vehicle.update_tour(problem, |tour| tour.reverse_and_anchor(t1, t3));

    vec![vehicle]
}
