//! Contains functionality to read CVRP problems.

mod reader;
pub use self::reader::CvrpProblem;
