#[cfg(test)]
#[path = "../../tests/unit/solver/tracker_test.rs"]
mod tracker_test;

use crate::models::Fleet;
use crate::utils::{Float, GenericResult};
use std::sync::Arc;

/// Observes new best solutions found by the search. Typically, persists them.
pub trait SolutionObserver {
    /// Called synchronously each time a better solution is found.
    fn on_best(&self, fleet: &Fleet, cost: Float) -> GenericResult<()>;
}

impl<F> SolutionObserver for F
where
    F: Fn(&Fleet, Float) -> GenericResult<()>,
{
    fn on_best(&self, fleet: &Fleet, cost: Float) -> GenericResult<()> {
        self(fleet, cost)
    }
}

/// Keeps the best solution seen so far and notifies the observer about every improvement.
pub struct BestTracker {
    fleet: Fleet,
    cost: Float,
    observer: Option<Arc<dyn SolutionObserver + Send + Sync>>,
}

impl BestTracker {
    /// Creates a new tracker seeded with the initial solution which is reported immediately.
    pub fn new(
        fleet: &Fleet,
        cost: Float,
        observer: Option<Arc<dyn SolutionObserver + Send + Sync>>,
    ) -> GenericResult<Self> {
        if let Some(observer) = observer.as_ref() {
            observer.on_best(fleet, cost)?;
        }

        Ok(Self { fleet: fleet.clone(), cost, observer })
    }

    /// Replaces the best solution if the given one is strictly cheaper. Returns true if replaced.
    pub fn consider_update(&mut self, fleet: &Fleet, cost: Float) -> GenericResult<bool> {
        if cost >= self.cost {
            return Ok(false);
        }

        self.fleet = fleet.clone();
        self.cost = cost;

        if let Some(observer) = self.observer.as_ref() {
            observer.on_best(&self.fleet, self.cost)?;
        }

        Ok(true)
    }

    /// Returns the best fleet.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Returns the best cost.
    pub fn cost(&self) -> Float {
        self.cost
    }

    /// Consumes the tracker returning the best solution.
    pub fn into_best(self) -> (Fleet, Float) {
        (self.fleet, self.cost)
    }
}
