use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as an amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("an amount is required")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Normalizes input for decimal parsing: trims whitespace and removes the
/// thousands separators people type (commas, spaces, narrow no-break spaces).
fn normalize_amount_input(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}' | '\u{202f}'))
        .collect()
}

/// Parses a string into a [`Decimal`] amount.
///
/// Handles `,` and space as thousands separators (e.g. `"1,500,000"` or
/// `"1 500 000"`); `.` is always the decimal point. Negative values parse
/// successfully and are rejected later by the calculator.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_amount_accepts_plain_numbers() {
        assert_eq!(parse_amount("100000").unwrap(), dec!(100000));
        assert_eq!(parse_amount("92400.50").unwrap(), dec!(92400.50));
    }

    #[test]
    fn parse_amount_accepts_thousands_separators() {
        assert_eq!(parse_amount("1,500,000").unwrap(), dec!(1500000));
        assert_eq!(parse_amount("1 500 000").unwrap(), dec!(1500000));
        assert_eq!(parse_amount("1\u{202f}500\u{202f}000").unwrap(), dec!(1500000));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  60000  ").unwrap(), dec!(60000));
    }

    #[test]
    fn parse_amount_keeps_the_sign() {
        assert_eq!(parse_amount("-100").unwrap(), dec!(-100));
    }

    #[test]
    fn parse_amount_rejects_empty_input() {
        assert!(matches!(parse_amount("   "), Err(ParseAmountError::Empty)));
    }

    #[test]
    fn parse_amount_rejects_non_numeric_input() {
        assert!(matches!(
            parse_amount("cent mille"),
            Err(ParseAmountError::Invalid { .. })
        ));
        assert!(parse_amount("1.500.000").is_err());
    }
}
