#[cfg(test)]
#[path = "../../../tests/unit/models/solution/fleet_test.rs"]
mod fleet_test;

use crate::models::problem::{CustomerId, DEPOT, Demand, Problem};
use crate::models::solution::{PenaltyTable, Tour, Vehicle, check_fleet};
use crate::utils::{Float, GenericResult};

/// A set of vehicles which serve all customers together.
#[derive(Clone, Debug, PartialEq)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Creates a fleet from vehicles as is, without any validation.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// Creates a fleet where every vehicle visits only the depot.
    pub fn empty(problem: &Problem) -> Self {
        Self { vehicles: (0..problem.vehicles()).map(|index| Vehicle::new(index, problem.capacity())).collect() }
    }

    /// Creates an initial fleet assigning customers greedily: each vehicle in turn takes the
    /// unserved customer with the largest demand which still fits until nothing fits anymore.
    pub fn greedy(problem: &Problem) -> GenericResult<Self> {
        let mut unserved = vec![true; problem.size()];
        unserved[DEPOT] = false;
        let mut remaining = problem.size() - 1;

        let vehicles = (0..problem.vehicles())
            .map(|index| {
                let mut available = problem.capacity();
                let mut customers = Vec::new();

                while let Some(customer) = find_largest_fitting(problem, unserved.as_slice(), available) {
                    available -= problem.demand(customer);
                    unserved[customer] = false;
                    remaining -= 1;
                    customers.push(customer);
                }

                Vehicle::with_tour(index, problem, Tour::with_customers(customers))
            })
            .collect();

        if remaining > 0 {
            return Err(format!(
                "cannot assign {remaining} customer(s): {} vehicle(s) with capacity {} are not enough, total demand is {}",
                problem.vehicles(),
                problem.capacity(),
                problem.total_demand()
            )
            .into());
        }

        Ok(Self { vehicles })
    }

    /// Creates a fleet from customer sequences, one per vehicle, validating the result.
    pub fn from_routes(problem: &Problem, routes: Vec<Vec<CustomerId>>) -> GenericResult<Self> {
        if routes.len() != problem.vehicles() {
            return Err(format!("expected {} routes, got {}", problem.vehicles(), routes.len()).into());
        }

        if let Some((index, customer)) = routes.iter().enumerate().find_map(|(index, customers)| {
            customers.iter().find(|&&customer| customer == DEPOT || customer >= problem.size()).map(|&c| (index, c))
        }) {
            return Err(format!("route {index} has unexpected customer {customer}").into());
        }

        let fleet = Self {
            vehicles: routes
                .into_iter()
                .enumerate()
                .map(|(index, customers)| Vehicle::with_tour(index, problem, Tour::with_customers(customers)))
                .collect(),
        };

        check_fleet(problem, &fleet)?;

        Ok(fleet)
    }

    /// Returns all vehicles.
    pub fn vehicles(&self) -> &[Vehicle] {
        self.vehicles.as_slice()
    }

    /// Returns vehicle by its index.
    pub fn get(&self, index: usize) -> Option<&Vehicle> {
        self.vehicles.get(index)
    }

    /// Returns amount of vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns true if fleet has no vehicles.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Replaces the vehicle with the same index.
    pub fn replace(&mut self, vehicle: Vehicle) {
        let index = vehicle.index();
        self.vehicles[index] = vehicle;
    }

    /// Returns total distance of all tours.
    pub fn raw_cost(&self, problem: &Problem) -> Float {
        self.vehicles.iter().map(|vehicle| vehicle.tour().raw_cost(problem.distances())).sum()
    }

    /// Returns total augmented cost of all tours.
    pub fn augmented_cost(&self, problem: &Problem, penalties: &PenaltyTable, lambda: Float) -> Float {
        self.vehicles.iter().map(|vehicle| vehicle.tour().augmented_cost(problem.distances(), penalties, lambda)).sum()
    }

    /// Returns amount of edges in tours of vehicles which serve at least one customer.
    pub fn active_edges(&self) -> usize {
        self.vehicles.iter().filter(|vehicle| vehicle.is_used()).map(|vehicle| vehicle.tour().len()).sum()
    }

    /// Returns all directed edges of all tours.
    pub fn edges(&self) -> impl Iterator<Item = (CustomerId, CustomerId)> + '_ {
        self.vehicles.iter().flat_map(|vehicle| vehicle.tour().edges())
    }

    /// Returns customer sequences of all vehicles, excluding the depot.
    pub fn routes(&self) -> Vec<Vec<CustomerId>> {
        self.vehicles.iter().map(|vehicle| vehicle.tour().customers().collect()).collect()
    }
}

/// Returns the unserved customer with the largest demand which fits into available capacity.
/// Among equal demands, the lowest customer id wins.
fn find_largest_fitting(problem: &Problem, unserved: &[bool], available: Demand) -> Option<CustomerId> {
    (1..problem.size()).filter(|&customer| unserved[customer] && problem.demand(customer) <= available).fold(
        None,
        |best, customer| match best {
            Some(best) if problem.demand(best) >= problem.demand(customer) => Some(best),
            _ => Some(customer),
        },
    )
}
