//! French-style number formatting for amounts and rates.
//!
//! Amounts are shown as whole francs with `.` as the thousands separator
//! (`15.000.000`), the way payslips in Benin print them.

use rust_decimal::Decimal;

use crate::calculations::common::round_to_unit;

/// Currency suffix appended to formatted amounts.
pub const CURRENCY: &str = "fCFA";

/// Formats an amount as whole francs with `.` thousands separators.
///
/// The value is rounded to the unit first.
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::format::format_fcfa_amount;
///
/// assert_eq!(format_fcfa_amount(dec!(15000000)), "15.000.000");
/// assert_eq!(format_fcfa_amount(dec!(92399.6)), "92.400");
/// assert_eq!(format_fcfa_amount(dec!(-1234)), "-1.234");
/// ```
pub fn format_fcfa_amount(amount: Decimal) -> String {
    let rounded = round_to_unit(amount);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats an amount followed by the currency suffix, e.g. `"92.400 fCFA"`.
pub fn format_fcfa(amount: Decimal) -> String {
    format!("{} {CURRENCY}", format_fcfa_amount(amount))
}

/// Formats a rate expressed as a fraction as a percentage with a fixed
/// number of decimals.
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::format::format_rate;
///
/// assert_eq!(format_rate(dec!(0.10), 0), "10%");
/// assert_eq!(format_rate(dec!(0.036), 1), "3.6%");
/// ```
pub fn format_rate(
    rate: Decimal,
    decimals: u32,
) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED).round_dp(decimals);
    format!("{percent:.prec$}%", prec = decimals as usize)
}
