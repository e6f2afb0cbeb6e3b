//! Salary calculations.
//!
//! [`BracketEvaluator`] maps a gross salary to its breakdown;
//! [`InverseSolver`] searches for the gross salary behind a desired net.

pub mod common;
pub mod evaluator;
pub mod solver;

pub use evaluator::{BracketEvaluator, CalculationError};
pub use solver::{InverseSolver, SolverConfig};
