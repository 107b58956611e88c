use crate::models::problem::{Demand, Problem};
use crate::models::solution::Tour;

/// A vehicle which serves its tour.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    index: usize,
    capacity: Demand,
    available: Demand,
    tour: Tour,
}

impl Vehicle {
    /// Creates a vehicle with a tour which visits only the depot.
    pub fn new(index: usize, capacity: Demand) -> Self {
        Self { index, capacity, available: capacity, tour: Tour::default() }
    }

    /// Creates a vehicle with the given tour, available capacity is computed from the tour.
    pub fn with_tour(index: usize, problem: &Problem, tour: Tour) -> Self {
        let mut vehicle = Self { index, capacity: problem.capacity(), available: problem.capacity(), tour };
        vehicle.recompute_available(problem);

        vehicle
    }

    /// Returns vehicle index within the fleet.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns vehicle capacity.
    pub fn capacity(&self) -> Demand {
        self.capacity
    }

    /// Returns capacity which is not yet used.
    pub fn available(&self) -> Demand {
        self.available
    }

    /// Returns currently loaded demand.
    pub fn load(&self) -> Demand {
        self.capacity - self.available
    }

    /// Returns vehicle tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Returns true if vehicle serves at least one customer.
    pub fn is_used(&self) -> bool {
        !self.tour.is_empty()
    }

    /// Applies a structural edit to the tour and recomputes the available capacity.
    pub fn update_tour<R>(&mut self, problem: &Problem, edit: impl FnOnce(&mut Tour) -> R) -> R {
        let result = edit(&mut self.tour);
        self.recompute_available(problem);

        result
    }

    /// Recomputes available capacity from the customers in the tour.
    pub fn recompute_available(&mut self, problem: &Problem) {
        let load: Demand = self.tour.customers().map(|customer| problem.demand(customer)).sum();
        self.available = self.capacity - load;
    }
}
