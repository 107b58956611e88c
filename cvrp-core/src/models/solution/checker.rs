#[cfg(test)]
#[path = "../../../tests/unit/models/solution/checker_test.rs"]
mod checker_test;

use crate::models::problem::{DEPOT, Problem};
use crate::models::solution::Fleet;
use crate::utils::{GenericError, GenericResult};

/// Checks that the fleet satisfies all structural and capacity invariants: every tour is a
/// single linked cycle anchored at the depot, loads stay within capacity and each customer
/// is served exactly once.
pub fn check_fleet(problem: &Problem, fleet: &Fleet) -> GenericResult<()> {
    let mut errors: Vec<GenericError> = Vec::new();

    if fleet.len() != problem.vehicles() {
        errors.push(format!("expected {} vehicles, got {}", problem.vehicles(), fleet.len()).into());
    }

    let mut visits = vec![0_usize; problem.size()];

    for (index, vehicle) in fleet.vehicles().iter().enumerate() {
        let tour = vehicle.tour();

        if vehicle.index() != index {
            errors.push(format!("vehicle at {index} has index {}", vehicle.index()).into());
        }

        if vehicle.capacity() != problem.capacity() {
            errors.push(format!("vehicle {index} has capacity {}", vehicle.capacity()).into());
        }

        if !tour.is_linked() {
            errors.push(format!("vehicle {index} has broken tour links").into());
        }

        let mut load = 0;
        for customer in tour.customers() {
            if customer == DEPOT || customer >= problem.size() {
                errors.push(format!("vehicle {index} has unexpected customer {customer}").into());
                continue;
            }

            visits[customer] += 1;
            load += problem.demand(customer);
        }

        if load != vehicle.load() {
            errors.push(format!("vehicle {index} tracks load {} but serves {load}", vehicle.load()).into());
        }

        if load > vehicle.capacity() {
            errors.push(format!("vehicle {index} load {load} exceeds capacity {}", vehicle.capacity()).into());
        }
    }

    visits.iter().enumerate().skip(1).filter(|(_, count)| **count != 1).for_each(|(customer, count)| {
        errors.push(format!("customer {customer} is served {count} time(s)").into());
    });

    if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(errors.as_slice(), ", ").into()) }
}
