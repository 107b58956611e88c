//! Contains extensions used by solve command.

pub mod config;
pub mod interruption;
