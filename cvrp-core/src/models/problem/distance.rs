#[cfg(test)]
#[path = "../../../tests/unit/models/problem/distance_test.rs"]
mod distance_test;

use crate::models::problem::{Coordinate, CustomerId};
use crate::utils::Float;

/// Keeps precomputed euclidean distances between all customer pairs.
pub struct DistanceTable {
    size: usize,
    values: Vec<Float>,
}

impl DistanceTable {
    /// Creates a new distance table from customer locations.
    pub fn new(locations: impl Iterator<Item = Coordinate>) -> Self {
        let locations = locations.collect::<Vec<_>>();
        let size = locations.len();

        let values = locations
            .iter()
            .flat_map(|from| {
                locations.iter().map(move |to| {
                    let (dx, dy) = (from.x - to.x, from.y - to.y);
                    (dx * dx + dy * dy).sqrt()
                })
            })
            .collect();

        Self { size, values }
    }

    /// Returns distance between two customers.
    #[inline]
    pub fn distance(&self, from: CustomerId, to: CustomerId) -> Float {
        debug_assert!(from < self.size && to < self.size);
        self.values[from * self.size + to]
    }

    /// Returns amount of customers the table is built for.
    pub fn size(&self) -> usize {
        self.size
    }
}
