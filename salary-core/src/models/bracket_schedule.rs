use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

use super::TaxBracket;

/// Label used for the social-contribution line item.
pub const DEFAULT_CONTRIBUTION_LABEL: &str = "Cotisation sociale";

/// Errors raised when a bracket table does not describe a valid schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    #[error("first bracket must start at 0, found {0}")]
    FirstBracketNotAtZero(Decimal),

    #[error("bracket {index} ends at {upper} which is not above its start {lower}")]
    EmptyBracket {
        index: usize,
        lower: Decimal,
        upper: Decimal,
    },

    #[error("bracket {index} starts at {found} but the previous bracket ends at {expected}")]
    Discontinuous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd(usize),

    #[error("last bracket must be unbounded")]
    BoundedLastBracket,

    #[error("rate {rate} of bracket {index} is outside [0, 1)")]
    BracketRateOutOfRange { index: usize, rate: Decimal },

    #[error("contribution rate {0} is outside [0, 1)")]
    ContributionRateOutOfRange(Decimal),
}

/// A validated income-tax bracket table plus the flat social-contribution
/// rate levied on the whole gross salary.
///
/// Brackets are sorted, contiguous, start at zero and end with an unbounded
/// band. Construction through [`BracketSchedule::new`] is the only way to
/// obtain one, so evaluators never need to re-check the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
    contribution_rate: Decimal,
    contribution_label: String,
}

impl BracketSchedule {
    /// Validates and builds a schedule.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] describing the first violated rule.
    pub fn new(
        brackets: Vec<TaxBracket>,
        contribution_rate: Decimal,
    ) -> Result<Self, ScheduleError> {
        Self::validate(&brackets, contribution_rate)?;

        Ok(Self {
            brackets,
            contribution_rate,
            contribution_label: DEFAULT_CONTRIBUTION_LABEL.to_string(),
        })
    }

    /// Replaces the label printed for the contribution line item.
    pub fn with_contribution_label(
        mut self,
        label: impl Into<String>,
    ) -> Self {
        self.contribution_label = label.into();
        self
    }

    /// The 2025 schedule for salaried employees in Benin: five ITS bands
    /// and the 3.6% employee CNSS contribution.
    pub fn benin_2025() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(60000)), dec!(0.00)),
                TaxBracket::new(dec!(60000), Some(dec!(150000)), dec!(0.10)),
                TaxBracket::new(dec!(150000), Some(dec!(250000)), dec!(0.15)),
                TaxBracket::new(dec!(250000), Some(dec!(500000)), dec!(0.19)),
                TaxBracket::new(dec!(500000), None, dec!(0.30)),
            ],
            contribution_rate: dec!(0.036),
            contribution_label: DEFAULT_CONTRIBUTION_LABEL.to_string(),
        }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn contribution_rate(&self) -> Decimal {
        self.contribution_rate
    }

    pub fn contribution_label(&self) -> &str {
        &self.contribution_label
    }

    fn validate(
        brackets: &[TaxBracket],
        contribution_rate: Decimal,
    ) -> Result<(), ScheduleError> {
        if !is_valid_rate(contribution_rate) {
            return Err(ScheduleError::ContributionRateOutOfRange(contribution_rate));
        }

        let first = brackets.first().ok_or(ScheduleError::NoTaxBrackets)?;
        if !first.lower_bound.is_zero() {
            return Err(ScheduleError::FirstBracketNotAtZero(first.lower_bound));
        }

        let last_index = brackets.len() - 1;
        let mut previous_upper: Option<Decimal> = None;

        for (index, bracket) in brackets.iter().enumerate() {
            if !is_valid_rate(bracket.rate) {
                return Err(ScheduleError::BracketRateOutOfRange {
                    index,
                    rate: bracket.rate,
                });
            }

            if let Some(expected) = previous_upper {
                if bracket.lower_bound != expected {
                    return Err(ScheduleError::Discontinuous {
                        index,
                        expected,
                        found: bracket.lower_bound,
                    });
                }
            }

            match bracket.upper_bound {
                Some(upper) if upper <= bracket.lower_bound => {
                    return Err(ScheduleError::EmptyBracket {
                        index,
                        lower: bracket.lower_bound,
                        upper,
                    });
                }
                Some(_) if index == last_index => return Err(ScheduleError::BoundedLastBracket),
                None if index != last_index => return Err(ScheduleError::UnboundedBeforeEnd(index)),
                _ => {}
            }

            previous_upper = bracket.upper_bound;
        }

        Ok(())
    }
}

impl Default for BracketSchedule {
    fn default() -> Self {
        Self::benin_2025()
    }
}

fn is_valid_rate(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate < Decimal::ONE
}
