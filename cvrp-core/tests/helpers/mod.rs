
pub mod solver;
