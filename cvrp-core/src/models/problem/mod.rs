//! Problem domain models.

#[cfg(test)]
#[path = "../../../tests/unit/models/problem/problem_test.rs"]
mod problem_test;

mod distance;
pub use self::distance::DistanceTable;

use crate::utils::{Float, GenericResult};

/// An identity of a customer which is its index in the problem's customer list.
pub type CustomerId = usize;

/// A demand (or load) amount.
pub type Demand = i32;

/// An identity of the depot customer.
pub const DEPOT: CustomerId = 0;

/// A 2D coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// X axis value.
    pub x: Float,
    /// Y axis value.
    pub y: Float,
}

/// A customer to be served. The customer with `DEPOT` id is the depot.
#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    /// A customer demand.
    pub demand: Demand,
    /// A customer location.
    pub location: Coordinate,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(demand: Demand, x: Float, y: Float) -> Self {
        Self { demand, location: Coordinate { x, y } }
    }
}

/// Defines a Capacitated Vehicle Routing Problem: customers served by a homogeneous fleet
/// of vehicles which start and end at the depot.
pub struct Problem {
    customers: Vec<Customer>,
    vehicles: usize,
    capacity: Demand,
    distances: DistanceTable,
}

impl Problem {
    /// Creates a new problem validating its definition.
    pub fn new(customers: Vec<Customer>, vehicles: usize, capacity: Demand) -> GenericResult<Self> {
        let depot = customers.first().ok_or("problem has no customers, at least the depot is expected")?;

        if depot.demand != 0 {
            return Err(format!("depot must have zero demand, got: {}", depot.demand).into());
        }

        if vehicles == 0 {
            return Err("problem must have at least one vehicle".into());
        }

        if capacity < 0 {
            return Err(format!("vehicle capacity cannot be negative, got: {capacity}").into());
        }

        if let Some((id, customer)) =
            customers.iter().enumerate().find(|(_, customer)| customer.demand < 0 || customer.demand > capacity)
        {
            return Err(format!(
                "customer {id} has demand {} which is outside of [0, {capacity}] range",
                customer.demand
            )
            .into());
        }

        let distances = DistanceTable::new(customers.iter().map(|customer| customer.location));

        Ok(Self { customers, vehicles, capacity, distances })
    }

    /// Returns all customers including the depot.
    pub fn customers(&self) -> &[Customer] {
        self.customers.as_slice()
    }

    /// Returns total amount of customers including the depot.
    pub fn size(&self) -> usize {
        self.customers.len()
    }

    /// Returns demand of the given customer.
    pub fn demand(&self, customer: CustomerId) -> Demand {
        self.customers[customer].demand
    }

    /// Returns amount of available vehicles.
    pub fn vehicles(&self) -> usize {
        self.vehicles
    }

    /// Returns capacity shared by all vehicles.
    pub fn capacity(&self) -> Demand {
        self.capacity
    }

    /// Returns distance table.
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Returns total demand of all customers.
    pub fn total_demand(&self) -> Demand {
        self.customers.iter().map(|customer| customer.demand).sum()
    }
}
