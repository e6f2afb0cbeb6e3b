//! Benin 2025 salary calculator: progressive income tax (ITS) plus the CNSS
//! social contribution, evaluated gross-to-net and searched net-to-gross.

pub mod calculations;
pub mod format;
pub mod limits;
pub mod models;

pub use calculations::{BracketEvaluator, CalculationError, InverseSolver, SolverConfig};
pub use limits::{DEFAULT_MAX_GROSS_SALARY, LimitError, SalaryLimits};
pub use models::*;
