//! A collection of models to represent problem and solution of the Capacitated Vehicle Routing Problem.

pub mod problem;
pub mod solution;

pub use self::problem::Problem;
pub use self::solution::Fleet;
