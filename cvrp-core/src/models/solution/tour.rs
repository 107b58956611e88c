#[cfg(test)]
#[path = "../../../tests/unit/models/solution/tour_test.rs"]
mod tour_test;

use crate::models::problem::{CustomerId, DEPOT, DistanceTable};
use crate::models::solution::PenaltyTable;
use crate::utils::Float;
use rustc_hash::FxHashMap;

/// A tour stop which keeps its customer and cached identities of its neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stop {
    /// A visited customer.
    pub customer: CustomerId,
    /// A customer visited right before this one.
    pub prev: CustomerId,
    /// A customer visited right after this one.
    pub next: CustomerId,
}

/// Represents a cyclic tour which starts and ends at the depot. The depot is always kept
/// at the first position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    stops: Vec<Stop>,
}

impl Default for Tour {
    fn default() -> Self {
        Self::with_customers(std::iter::empty())
    }
}

impl Tour {
    /// Creates a tour which visits given customers after the depot.
    pub fn with_customers(customers: impl IntoIterator<Item = CustomerId>) -> Self {
        let stops = std::iter::once(DEPOT)
            .chain(customers)
            .map(|customer| Stop { customer, prev: customer, next: customer })
            .collect();

        let mut tour = Self { stops };
        tour.relink();

        tour
    }

    /// Creates a tour from a cyclic sequence which contains the depot at any position.
    /// The sequence is rotated to have the depot first.
    pub fn from_cycle(mut sequence: Vec<CustomerId>) -> Self {
        let depot_idx = sequence.iter().position(|&customer| customer == DEPOT).unwrap_or_default();
        sequence.rotate_left(depot_idx);
        debug_assert_eq!(sequence.first(), Some(&DEPOT));

        Self::with_customers(sequence.into_iter().skip(1))
    }

    /// Recomputes predecessor and successor of every stop from the stop order.
    pub fn relink(&mut self) {
        let size = self.stops.len();
        for idx in 0..size {
            let prev = self.stops[(idx + size - 1) % size].customer;
            let next = self.stops[(idx + 1) % size].customer;

            let stop = &mut self.stops[idx];
            stop.prev = prev;
            stop.next = next;
        }
    }

    /// Returns amount of stops including the depot.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the tour has no customers, only the depot.
    pub fn is_empty(&self) -> bool {
        self.stops.len() <= 1
    }

    /// Returns all stops.
    pub fn stops(&self) -> &[Stop] {
        self.stops.as_slice()
    }

    /// Returns a customer at given position.
    #[inline]
    pub fn customer_at(&self, position: usize) -> CustomerId {
        self.stops[position].customer
    }

    /// Returns a customer visited before the one at given position.
    #[inline]
    pub fn predecessor(&self, position: usize) -> CustomerId {
        self.stops[position].prev
    }

    /// Returns a customer visited after the one at given position.
    #[inline]
    pub fn successor(&self, position: usize) -> CustomerId {
        self.stops[position].next
    }

    /// Returns customers served by the tour, excluding the depot.
    pub fn customers(&self) -> impl Iterator<Item = CustomerId> + '_ {
        self.stops.iter().skip(1).map(|stop| stop.customer)
    }

    /// Returns customers starting from the given position (inclusive) till the end of the tour.
    pub fn tail(&self, position: usize) -> impl Iterator<Item = CustomerId> + '_ {
        self.stops.iter().skip(position).map(|stop| stop.customer)
    }

    /// Returns directed edges of the tour.
    pub fn edges(&self) -> impl Iterator<Item = (CustomerId, CustomerId)> + '_ {
        self.stops.iter().map(|stop| (stop.customer, stop.next))
    }

    /// Inserts a customer right after the given position.
    pub fn insert_after(&mut self, position: usize, customer: CustomerId) {
        debug_assert_ne!(customer, DEPOT);
        self.stops.insert(position + 1, Stop { customer, prev: customer, next: customer });
        self.relink();
    }

    /// Removes a customer from the given position.
    pub fn remove_at(&mut self, position: usize) -> CustomerId {
        debug_assert!(position > 0, "depot cannot be removed from the tour");
        let stop = self.stops.remove(position);
        self.relink();

        stop.customer
    }

    /// Replaces a customer at the given position returning the old one.
    pub fn replace_at(&mut self, position: usize, customer: CustomerId) -> CustomerId {
        debug_assert!(position > 0, "depot cannot be replaced in the tour");
        debug_assert_ne!(customer, DEPOT);
        let old = std::mem::replace(&mut self.stops[position].customer, customer);
        self.relink();

        old
    }

    /// Replaces all customers after the given position with the new tail, returning the old tail.
    pub fn splice_tail(&mut self, position: usize, tail: impl IntoIterator<Item = CustomerId>) -> Vec<CustomerId> {
        let old_tail = self
            .stops
            .splice(position + 1.., tail.into_iter().map(|customer| Stop { customer, prev: customer, next: customer }))
            .map(|stop| stop.customer)
            .collect();
        self.relink();

        old_tail
    }

    /// Applies a 2-opt exchange: edges `(t1, t1 + 1)` and `(t3, t3 + 1)` are replaced with
    /// `(t1, t3)` and `(t1 + 1, t3 + 1)`. Positions are cyclic, the resulting tour is
    /// anchored at the depot again.
    pub fn reverse_and_anchor(&mut self, t1: usize, t3: usize) {
        let size = self.stops.len();
        let t4 = (t3 + 1) % size;

        let mut sequence = Vec::with_capacity(size);
        sequence.push(self.stops[t1].customer);

        let mut t = t3;
        while t != t1 {
            sequence.push(self.stops[t].customer);
            t = (t + size - 1) % size;
        }

        let mut t = t4;
        while t != t1 {
            sequence.push(self.stops[t].customer);
            t = (t + 1) % size;
        }

        *self = Self::from_cycle(sequence);
    }

    /// Returns total distance of the tour.
    pub fn raw_cost(&self, distances: &DistanceTable) -> Float {
        self.edges().map(|(from, to)| distances.distance(from, to)).sum()
    }

    /// Returns total distance of the tour augmented with weighted edge penalties.
    pub fn augmented_cost(&self, distances: &DistanceTable, penalties: &PenaltyTable, lambda: Float) -> Float {
        self.edges()
            .map(|(from, to)| distances.distance(from, to) + lambda * penalties.get(from, to) as Float)
            .sum()
    }

    /// Checks whether cached links form a single cycle which visits every stop exactly once
    /// and starts with the depot.
    pub fn is_linked(&self) -> bool {
        let size = self.stops.len();
        if self.stops.first().is_none_or(|stop| stop.customer != DEPOT) {
            return false;
        }

        let positions = self
            .stops
            .iter()
            .enumerate()
            .map(|(position, stop)| (stop.customer, position))
            .collect::<FxHashMap<_, _>>();

        if positions.len() != size {
            return false;
        }

        let mut visited = vec![false; size];
        let mut current = 0;

        for _ in 0..size {
            if visited[current] {
                return false;
            }
            visited[current] = true;

            let Some(&next) = positions.get(&self.stops[current].next) else {
                return false;
            };

            if self.stops[next].prev != self.stops[current].customer {
                return false;
            }

            current = next;
        }

        current == 0 && visited.into_iter().all(|is_visited| is_visited)
    }
}
