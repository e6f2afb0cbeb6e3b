//! Upper bounds on the amounts a caller may submit.
//!
//! Only the gross ceiling is configured; the net ceiling is derived from it
//! once, when the limits are built, and then passed around by value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::calculations::BracketEvaluator;
use crate::calculations::CalculationError;
use crate::calculations::common::round_to_unit;
use crate::format::format_fcfa;

/// Default gross ceiling, in francs CFA.
pub const DEFAULT_MAX_GROSS_SALARY: Decimal = dec!(15000000);

/// An amount exceeded one of the configured ceilings. Each variant names the
/// counterpart ceiling so the message can say what the amount implies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    #[error(
        "gross salary {} exceeds the maximum of {} (more than {} net)",
        fcfa(.amount),
        fcfa(.max_gross),
        fcfa(.max_net)
    )]
    GrossTooHigh {
        amount: Decimal,
        max_gross: Decimal,
        max_net: Decimal,
    },

    #[error(
        "net salary {} exceeds the maximum of {} (more than {} gross)",
        fcfa(.amount),
        fcfa(.max_net),
        fcfa(.max_gross)
    )]
    NetTooHigh {
        amount: Decimal,
        max_net: Decimal,
        max_gross: Decimal,
    },
}

fn fcfa(amount: &Decimal) -> String {
    format_fcfa(*amount)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryLimits {
    max_gross: Decimal,
    max_net: Decimal,
}

impl SalaryLimits {
    /// Builds the limits for `max_gross`, deriving the net ceiling from the
    /// schedule behind `evaluator`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::NegativeAmount`] if `max_gross` is negative.
    pub fn derive(
        evaluator: &BracketEvaluator<'_>,
        max_gross: Decimal,
    ) -> Result<Self, CalculationError> {
        let max_net = round_to_unit(evaluator.net_salary(max_gross)?);
        debug!(%max_gross, %max_net, "derived salary limits");

        Ok(Self { max_gross, max_net })
    }

    pub fn max_gross(&self) -> Decimal {
        self.max_gross
    }

    pub fn max_net(&self) -> Decimal {
        self.max_net
    }

    /// Accepts gross amounts up to and including the ceiling.
    pub fn check_gross(
        &self,
        amount: Decimal,
    ) -> Result<(), LimitError> {
        if amount > self.max_gross {
            return Err(LimitError::GrossTooHigh {
                amount,
                max_gross: self.max_gross,
                max_net: self.max_net,
            });
        }
        Ok(())
    }

    /// Accepts net amounts up to and including the derived ceiling.
    pub fn check_net(
        &self,
        amount: Decimal,
    ) -> Result<(), LimitError> {
        if amount > self.max_net {
            return Err(LimitError::NetTooHigh {
                amount,
                max_net: self.max_net,
                max_gross: self.max_gross,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::BracketSchedule;

    fn default_limits() -> SalaryLimits {
        let schedule = BracketSchedule::benin_2025();
        SalaryLimits::derive(&BracketEvaluator::new(&schedule), DEFAULT_MAX_GROSS_SALARY).unwrap()
    }

    #[test]
    fn default_net_ceiling_is_derived_from_gross_ceiling() {
        let limits = default_limits();

        assert_eq!(limits.max_gross(), dec!(15000000));
        assert_eq!(limits.max_net(), dec!(10038500));
    }

    #[test]
    fn net_ceiling_is_rounded_to_the_unit() {
        let schedule = BracketSchedule::benin_2025();
        let limits = SalaryLimits::derive(&BracketEvaluator::new(&schedule), dec!(100001)).unwrap();

        // 100001 nets 92400.864
        assert_eq!(limits.max_net(), dec!(92401));
    }

    #[test]
    fn negative_ceiling_is_rejected() {
        let schedule = BracketSchedule::benin_2025();

        assert_eq!(
            SalaryLimits::derive(&BracketEvaluator::new(&schedule), dec!(-1)),
            Err(CalculationError::NegativeAmount(dec!(-1)))
        );
    }

    #[test]
    fn amounts_at_the_ceiling_are_accepted() {
        let limits = default_limits();

        assert_eq!(limits.check_gross(dec!(15000000)), Ok(()));
        assert_eq!(limits.check_net(dec!(10038500)), Ok(()));
    }

    #[test]
    fn gross_above_ceiling_is_rejected_with_net_counterpart() {
        let limits = default_limits();

        let err = limits.check_gross(dec!(15000001)).unwrap_err();

        assert_eq!(
            err.to_string(),
            "gross salary 15.000.001 fCFA exceeds the maximum of 15.000.000 fCFA \
             (more than 10.038.500 fCFA net)"
        );
    }

    #[test]
    fn net_above_ceiling_is_rejected_with_gross_counterpart() {
        let limits = default_limits();

        let err = limits.check_net(dec!(10038501)).unwrap_err();

        assert!(matches!(err, LimitError::NetTooHigh { .. }));
        assert!(err.to_string().contains("15.000.000 fCFA gross"));
    }
}
