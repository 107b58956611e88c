#[cfg(test)]
#[path = "../../../tests/unit/models/solution/penalty_test.rs"]
mod penalty_test;

use crate::models::problem::CustomerId;

/// A penalty counter type.
pub type Penalty = u32;

/// Keeps penalty counters for undirected edges. As penalties are symmetric, only the lower
/// triangle of the matrix is stored.
#[derive(Clone, Debug, Default)]
pub struct PenaltyTable {
    size: usize,
    values: Vec<Penalty>,
}

impl PenaltyTable {
    /// Creates a new table with all penalties set to zero.
    pub fn new(size: usize) -> Self {
        Self { size, values: vec![0; size * (size + 1) / 2] }
    }

    /// Returns penalty of the edge between two customers.
    #[inline]
    pub fn get(&self, from: CustomerId, to: CustomerId) -> Penalty {
        self.values[self.index(from, to)]
    }

    /// Increments penalty of the edge by one returning a new value.
    pub fn increment(&mut self, from: CustomerId, to: CustomerId) -> Penalty {
        let index = self.index(from, to);
        self.values[index] = self.values[index].saturating_add(1);

        self.values[index]
    }

    /// Returns amount of customers the table is built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns sum of all penalties.
    pub fn total(&self) -> u64 {
        self.values.iter().map(|&value| value as u64).sum()
    }

    #[inline]
    fn index(&self, from: CustomerId, to: CustomerId) -> usize {
        debug_assert!(from < self.size && to < self.size);
        let (high, low) = if from >= to { (from, to) } else { (to, from) };

        high * (high + 1) / 2 + low
    }
}
