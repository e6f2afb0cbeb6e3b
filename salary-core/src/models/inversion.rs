use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Breakdown;

/// How the inverse search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Convergence {
    /// The net salary at the solved gross is within tolerance of the target.
    Converged { iterations: u32 },

    /// The iteration budget ran out. `residual` is the signed net-salary
    /// error (achieved minus desired) at the returned gross.
    BestEffort { iterations: u32, residual: Decimal },
}

impl Convergence {
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }

    pub fn iterations(&self) -> u32 {
        match *self {
            Self::Converged { iterations } | Self::BestEffort { iterations, .. } => iterations,
        }
    }
}

/// Gross salary found for a desired net salary, with the breakdown
/// recomputed at that gross.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InversionResult {
    pub desired_net: Decimal,
    pub gross_salary: Decimal,
    pub breakdown: Breakdown,
    pub convergence: Convergence,
}

impl InversionResult {
    pub fn is_converged(&self) -> bool {
        self.convergence.is_converged()
    }
}
