#[path = "../../../cvrp-core/tests/helpers/macros.rs"]
#[macro_use]
pub mod macros;

use cvrp_core::prelude::*;
use std::sync::Arc;

/// A small instance: four customers with demand 3 around the depot and four vehicles.
pub const VRP_5_4_1: &str = "5 4 10\n0 0 0\n3 0 10\n3 -10 10\n3 0 -10\n3 10 -10\n";

pub fn create_vrp_5_4_1_problem() -> Arc<Problem> {
    let customers = vec![
        Customer::new(0, 0., 0.),
        Customer::new(3, 0., 10.),
        Customer::new(3, -10., 10.),
        Customer::new(3, 0., -10.),
        Customer::new(3, 10., -10.),
    ];

    Arc::new(Problem::new(customers, 4, 10).expect("cannot create problem"))
}
