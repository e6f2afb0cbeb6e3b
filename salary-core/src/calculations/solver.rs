//! Net-to-gross inversion.
//!
//! There is no closed-form inverse in use here: the solver runs a damped
//! search that repeatedly evaluates the schedule and nudges the gross salary
//! towards the target net.
//!
//! # Search
//!
//! 1. Seed: `gross = desired_net × (1 + contribution rate)`.
//! 2. Evaluate the net at `gross`; `diff = net - desired_net`.
//! 3. Stop when `|diff| <= tolerance`.
//! 4. Otherwise move `gross` by `max(|diff|, min_step)`, upwards when the net
//!    is too low and downwards when it is too high.
//! 5. After `max_iterations` moves, return the last gross as a best effort.
//!
//! No bracketing interval is kept, so with a large `min_step` the search can
//! overshoot and bounce between two points around the answer. Its precision
//! is then bounded by `min_step`, not by `tolerance`; the returned
//! [`Convergence`] tells the two cases apart.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::calculations::{InverseSolver, SolverConfig};
//! use salary_core::BracketSchedule;
//!
//! let schedule = BracketSchedule::benin_2025();
//! let solver = InverseSolver::new(&schedule, SolverConfig::default());
//!
//! let result = solver.solve_gross_for_net(dec!(92400)).unwrap();
//!
//! assert!((result.gross_salary - dec!(100000)).abs() < dec!(1000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::common::max;
use crate::calculations::evaluator::{BracketEvaluator, CalculationError, ensure_non_negative};
use crate::models::{BracketSchedule, Convergence, InversionResult};

/// Tuning knobs for the inverse search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Largest acceptable gap between achieved and desired net salary.
    pub tolerance: Decimal,

    /// Number of moves allowed before giving up.
    pub max_iterations: u32,

    /// Smallest move applied to the gross salary in one iteration.
    pub min_step: Decimal,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: dec!(1),
            max_iterations: 100,
            min_step: dec!(1000),
        }
    }
}

/// Finds the gross salary that yields a desired net salary.
#[derive(Debug, Clone, Copy)]
pub struct InverseSolver<'a> {
    evaluator: BracketEvaluator<'a>,
    config: SolverConfig,
}

impl<'a> InverseSolver<'a> {
    pub fn new(
        schedule: &'a BracketSchedule,
        config: SolverConfig,
    ) -> Self {
        Self {
            evaluator: BracketEvaluator::new(schedule),
            config,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Searches for the gross salary whose net matches `desired_net`.
    ///
    /// Running out of iterations is not an error: the last gross is returned
    /// with [`Convergence::BestEffort`].
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::NegativeAmount`] if `desired_net` is
    /// negative, and [`CalculationError::AmountOutOfRange`] if the search
    /// would overflow [`Decimal`] (targets close to `Decimal::MAX`).
    pub fn solve_gross_for_net(
        &self,
        desired_net: Decimal,
    ) -> Result<InversionResult, CalculationError> {
        let desired_net = ensure_non_negative(desired_net)?;

        let (gross_salary, convergence) = self.search(desired_net)?;

        match convergence {
            Convergence::Converged { iterations } => {
                debug!(%desired_net, %gross_salary, iterations, "inverse search converged");
            }
            Convergence::BestEffort { iterations, residual } => {
                warn!(
                    %desired_net,
                    %gross_salary,
                    %residual,
                    iterations,
                    "inverse search exhausted its iteration budget"
                );
            }
        }

        let breakdown = self.evaluator.evaluate(gross_salary)?;

        Ok(InversionResult {
            desired_net,
            gross_salary,
            breakdown,
            convergence,
        })
    }

    fn seed(
        &self,
        desired_net: Decimal,
    ) -> Result<Decimal, CalculationError> {
        desired_net
            .checked_mul(Decimal::ONE + self.evaluator.schedule().contribution_rate())
            .ok_or(CalculationError::AmountOutOfRange(desired_net))
    }

    fn search(
        &self,
        desired_net: Decimal,
    ) -> Result<(Decimal, Convergence), CalculationError> {
        let mut gross = self.seed(desired_net)?;

        for iteration in 0..self.config.max_iterations {
            let diff = self.evaluator.net_salary(gross)? - desired_net;
            if diff.abs() <= self.config.tolerance {
                return Ok((
                    gross,
                    Convergence::Converged {
                        iterations: iteration,
                    },
                ));
            }

            let step = max(diff.abs(), self.config.min_step);
            gross = if diff < Decimal::ZERO {
                gross
                    .checked_add(step)
                    .ok_or(CalculationError::AmountOutOfRange(desired_net))?
            } else {
                // Gross salaries are never negative.
                max(gross - step, Decimal::ZERO)
            };
        }

        let residual = self.evaluator.net_salary(gross)? - desired_net;
        let convergence = if residual.abs() <= self.config.tolerance {
            Convergence::Converged {
                iterations: self.config.max_iterations,
            }
        } else {
            Convergence::BestEffort {
                iterations: self.config.max_iterations,
                residual,
            }
        };

        Ok((gross, convergence))
    }
}
