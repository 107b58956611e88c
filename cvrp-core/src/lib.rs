//! Core crate contains the main building blocks of a guided local search for the
//! ***Capacitated Vehicle Routing Problem***.
//!
//! A problem is defined by a set of customers with demand and planar location (customer
//! zero is the depot) and a fleet of homogeneous vehicles with the same capacity. The goal
//! is to find tours which serve every customer exactly once without exceeding capacity
//! and minimize total euclidean length.
//!
//! The search is deterministic: there is no randomness and the same input always gives the
//! same sequence of moves.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
