//! This module reimports commonly used types.

pub use crate::models::problem::{Coordinate, Customer, CustomerId, DEPOT, Demand};
pub use crate::models::solution::{Tour, Vehicle, check_fleet};
pub use crate::models::{Fleet, Problem};

pub use crate::solver::{Builder, GlsConfig, Metrics, SolutionObserver, Solver};

pub use crate::utils::{Environment, Float, GenericError, GenericResult, InfoLogger, Quota, TimeQuota};
