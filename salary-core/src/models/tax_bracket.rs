use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::{CURRENCY, format_fcfa_amount};

/// One marginal band of the income-tax schedule.
///
/// The band covers the half-open interval `[lower_bound, upper_bound)`; a
/// missing `upper_bound` means the band is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        lower_bound: Decimal,
        upper_bound: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            rate,
        }
    }

    /// Portion of `gross` that falls inside this band.
    pub fn taxable_slice(
        &self,
        gross: Decimal,
    ) -> Decimal {
        if gross <= self.lower_bound {
            return Decimal::ZERO;
        }
        let ceiling = match self.upper_bound {
            Some(upper) if upper < gross => upper,
            _ => gross,
        };
        ceiling - self.lower_bound
    }

    /// Whether a salary of `gross` is fully allocated once this band is taxed.
    pub fn covers(
        &self,
        gross: Decimal,
    ) -> bool {
        self.upper_bound.is_none_or(|upper| gross <= upper)
    }

    /// Human-readable band label, e.g. `"60.000 - 150.000 fCFA"`.
    pub fn label(&self) -> String {
        match self.upper_bound {
            Some(upper) if self.lower_bound.is_zero() => {
                format!("<= {} {CURRENCY}", format_fcfa_amount(upper))
            }
            None => format!("> {} {CURRENCY}", format_fcfa_amount(self.lower_bound)),
            Some(upper) => format!(
                "{} - {} {CURRENCY}",
                format_fcfa_amount(self.lower_bound),
                format_fcfa_amount(upper)
            ),
        }
    }
}
