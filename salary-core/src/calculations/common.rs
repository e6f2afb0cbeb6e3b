//! Common utility functions for salary calculations.
//!
//! This module provides shared functionality used by both the bracket
//! evaluator and the inverse solver, including rounding to the currency unit.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to the nearest whole currency unit using half-up
/// rounding.
///
/// The franc CFA has no subunit in everyday use, so every amount that leaves
/// the calculator is a whole number. Values at exactly `.5` are rounded away
/// from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_to_unit;
///
/// assert_eq!(round_to_unit(dec!(3446.1504)), dec!(3446));
/// assert_eq!(round_to_unit(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_to_unit(dec!(-1234.5)), dec!(-1235)); // Away from zero
/// ```
pub fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(1000)), dec!(1000));
/// assert_eq!(max(dec!(1500.25), dec!(1000)), dec!(1500.25));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_to_unit tests
    // =========================================================================

    #[test]
    fn round_to_unit_rounds_down_below_midpoint() {
        let result = round_to_unit(dec!(3446.4999));

        assert_eq!(result, dec!(3446));
    }

    #[test]
    fn round_to_unit_rounds_up_at_midpoint() {
        let result = round_to_unit(dec!(3446.5));

        assert_eq!(result, dec!(3447));
    }

    #[test]
    fn round_to_unit_rounds_up_above_midpoint() {
        let result = round_to_unit(dec!(3446.51));

        assert_eq!(result, dec!(3447));
    }

    #[test]
    fn round_to_unit_handles_negative_values() {
        let result = round_to_unit(dec!(-502.5));

        assert_eq!(result, dec!(-503)); // Away from zero
    }

    #[test]
    fn round_to_unit_preserves_whole_values() {
        let result = round_to_unit(dec!(92400));

        assert_eq!(result, dec!(92400));
    }

    #[test]
    fn round_to_unit_handles_zero() {
        let result = round_to_unit(dec!(0.0000));

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn round_to_unit_handles_large_values() {
        let result = round_to_unit(dec!(14999999.5));

        assert_eq!(result, dec!(15000000));
    }

    // =========================================================================
    // max / min tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(502.16), dec!(1000)), dec!(1000));
    }

    #[test]
    fn max_returns_first_when_larger() {
        assert_eq!(max(dec!(3692.39), dec!(1000)), dec!(3692.39));
    }

    #[test]
    fn max_handles_equal_values() {
        assert_eq!(max(dec!(1000), dec!(1000)), dec!(1000));
    }

    #[test]
    fn min_returns_smaller_value() {
        assert_eq!(min(dec!(100000), dec!(60000)), dec!(60000));
        assert_eq!(min(dec!(45000), dec!(60000)), dec!(45000));
    }
}
