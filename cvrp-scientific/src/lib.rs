//! Scientific crate contains logic to read and write problems and solutions in the plain
//! text format commonly used to benchmark CVRP algorithms.
//!
//! # Problem format
//!
//! The first line is `<customers> <vehicles> <capacity>` where customers include the depot.
//! It is followed by one `<demand> <x> <y>` line per customer, the first one is the depot.
//!
//! # Solution format
//!
//! The first line is `<cost> 0`, then there is one line per vehicle with visited customers
//! starting and ending at the depot, e.g. `0 3 1 0`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use cvrp_core as core;

pub mod common;
pub mod cvrp;
