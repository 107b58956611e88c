//! A crate which contains command line interface extensions of *CVRP* solver: the JSON
//! configuration of the search and the interruption handling.
//!
//! The binary `cvrp` reads a problem in the text format defined by `cvrp-scientific`,
//! runs guided local search and keeps the best solution persisted in the output file.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod extensions;
