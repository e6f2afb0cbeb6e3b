//! Gross-to-net evaluation against a progressive bracket schedule.
//!
//! # Evaluation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Social contribution: gross × contribution rate |
//! | 2    | For each bracket `[lo, hi)`: slice = `min(gross, hi) - lo` when gross > lo |
//! | 3    | Bracket tax: slice × bracket rate (brackets with an empty slice are skipped) |
//! | 4    | Total deductions: contribution + Σ bracket tax |
//! | 5    | Net salary: gross - total deductions |
//!
//! A salary sitting exactly on a bracket edge is fully taxed by the brackets
//! below that edge; the next bracket receives an empty slice and emits no
//! line item.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::calculations::BracketEvaluator;
//! use salary_core::BracketSchedule;
//!
//! let schedule = BracketSchedule::benin_2025();
//! let evaluator = BracketEvaluator::new(&schedule);
//!
//! let breakdown = evaluator.evaluate(dec!(100000)).unwrap();
//!
//! assert_eq!(breakdown.total_contributions, dec!(3600));
//! assert_eq!(breakdown.total_income_tax, dec!(4000));
//! assert_eq!(breakdown.net_salary, dec!(92400));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::trace;

use crate::calculations::common::min;
use crate::models::{BracketLine, BracketSchedule, Breakdown, ContributionLine};

/// Errors that can occur when evaluating or inverting a salary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// Salaries are non-negative; the caller decides how to report this.
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    /// The search would step past the range of [`Decimal`].
    #[error("amount {0} is too large to search")]
    AmountOutOfRange(Decimal),
}

/// Rejects negative amounts. Negative zero is accepted.
pub(crate) fn ensure_non_negative(amount: Decimal) -> Result<Decimal, CalculationError> {
    if amount < Decimal::ZERO {
        return Err(CalculationError::NegativeAmount(amount));
    }
    Ok(amount)
}

/// Maps a gross salary to its full contribution and income-tax breakdown.
#[derive(Debug, Clone, Copy)]
pub struct BracketEvaluator<'a> {
    schedule: &'a BracketSchedule,
}

impl<'a> BracketEvaluator<'a> {
    pub fn new(schedule: &'a BracketSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &'a BracketSchedule {
        self.schedule
    }

    /// Evaluates a gross salary.
    ///
    /// All amounts in the returned [`Breakdown`] are exact.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::NegativeAmount`] if `gross` is negative.
    pub fn evaluate(
        &self,
        gross: Decimal,
    ) -> Result<Breakdown, CalculationError> {
        let gross = ensure_non_negative(gross)?;

        let contribution = self.contribution(gross);
        let bracket_lines = self.bracket_lines(gross);

        let total_income_tax: Decimal = bracket_lines.iter().map(|line| line.tax).sum();
        let total_deductions = contribution.amount + total_income_tax;
        let net_salary = gross - total_deductions;

        trace!(
            %gross,
            %net_salary,
            brackets = bracket_lines.len(),
            "evaluated gross salary"
        );

        Ok(Breakdown {
            gross_salary: gross,
            total_contributions: contribution.amount,
            contributions: vec![contribution],
            bracket_lines,
            total_income_tax,
            total_deductions,
            net_salary,
        })
    }

    /// Social contribution levied on the whole gross salary.
    fn contribution(
        &self,
        gross: Decimal,
    ) -> ContributionLine {
        let rate = self.schedule.contribution_rate();
        ContributionLine {
            label: self.schedule.contribution_label().to_string(),
            rate,
            amount: gross * rate,
        }
    }

    /// Walks the brackets in ascending order, stopping at the bracket that
    /// allocates the last franc of `gross`.
    fn bracket_lines(
        &self,
        gross: Decimal,
    ) -> Vec<BracketLine> {
        let mut lines = Vec::new();

        for bracket in self.schedule.brackets() {
            let taxable_amount = bracket.taxable_slice(gross);
            if taxable_amount > Decimal::ZERO {
                lines.push(BracketLine {
                    label: bracket.label(),
                    rate: bracket.rate,
                    taxable_amount,
                    tax: taxable_amount * bracket.rate,
                });
            }

            if bracket.covers(gross) {
                break;
            }
        }

        lines
    }

    /// Net salary only, for callers that do not need the line items.
    pub fn net_salary(
        &self,
        gross: Decimal,
    ) -> Result<Decimal, CalculationError> {
        let gross = ensure_non_negative(gross)?;

        let income_tax: Decimal = self
            .schedule
            .brackets()
            .iter()
            .take_while(|bracket| gross > bracket.lower_bound)
            .map(|bracket| {
                let ceiling = bracket.upper_bound.map_or(gross, |upper| min(gross, upper));
                (ceiling - bracket.lower_bound) * bracket.rate
            })
            .sum();

        Ok(gross - gross * self.schedule.contribution_rate() - income_tax)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn evaluate(gross: Decimal) -> Breakdown {
        let schedule = BracketSchedule::benin_2025();
        BracketEvaluator::new(&schedule).evaluate(gross).unwrap()
    }

    fn bracket_taxes(breakdown: &Breakdown) -> Vec<Decimal> {
        breakdown.bracket_lines.iter().map(|line| line.tax).collect()
    }

    // =========================================================================
    // input validation
    // =========================================================================

    #[test]
    fn negative_gross_is_rejected() {
        let schedule = BracketSchedule::benin_2025();
        let evaluator = BracketEvaluator::new(&schedule);

        assert_eq!(
            evaluator.evaluate(dec!(-1)),
            Err(CalculationError::NegativeAmount(dec!(-1)))
        );
        assert_eq!(
            evaluator.net_salary(dec!(-0.01)),
            Err(CalculationError::NegativeAmount(dec!(-0.01)))
        );
    }

    // =========================================================================
    // zero and first band
    // =========================================================================

    #[test]
    fn zero_gross_yields_zero_everything() {
        let breakdown = evaluate(dec!(0));

        assert!(breakdown.bracket_lines.is_empty());
        assert_eq!(breakdown.total_contributions, Decimal::ZERO);
        assert_eq!(breakdown.total_income_tax, Decimal::ZERO);
        assert_eq!(breakdown.total_deductions, Decimal::ZERO);
        assert_eq!(breakdown.net_salary, Decimal::ZERO);
    }

    #[test]
    fn salary_in_first_band_pays_only_contribution() {
        let breakdown = evaluate(dec!(50000));

        assert_eq!(breakdown.bracket_lines.len(), 1);
        assert_eq!(breakdown.bracket_lines[0].taxable_amount, dec!(50000));
        assert_eq!(breakdown.total_contributions, dec!(1800));
        assert_eq!(breakdown.total_income_tax, Decimal::ZERO);
        assert_eq!(breakdown.net_salary, dec!(48200));
    }

    // =========================================================================
    // reference scenarios
    // =========================================================================

    #[test]
    fn hundred_thousand_nets_ninety_two_thousand_four_hundred() {
        let breakdown = evaluate(dec!(100000));

        assert_eq!(breakdown.contributions[0].amount, dec!(3600));
        assert_eq!(bracket_taxes(&breakdown), vec![dec!(0), dec!(4000)]);
        assert_eq!(breakdown.total_income_tax, dec!(4000));
        assert_eq!(breakdown.total_deductions, dec!(7600));
        assert_eq!(breakdown.net_salary, dec!(92400));
    }

    #[test]
    fn six_hundred_thousand_touches_every_band() {
        let breakdown = evaluate(dec!(600000));

        assert_eq!(
            bracket_taxes(&breakdown),
            vec![dec!(0), dec!(9000), dec!(15000), dec!(47500), dec!(30000)]
        );
        assert_eq!(breakdown.total_contributions, dec!(21600));
        assert_eq!(breakdown.total_income_tax, dec!(101500));
        assert_eq!(breakdown.net_salary, dec!(476900));
    }

    #[test]
    fn fifteen_million_nets_the_published_ceiling() {
        let breakdown = evaluate(dec!(15000000));

        assert_eq!(breakdown.net_salary, dec!(10038500));
    }

    // =========================================================================
    // bracket edges
    // =========================================================================

    #[test]
    fn salary_on_first_edge_emits_no_ten_percent_line() {
        let breakdown = evaluate(dec!(60000));

        assert_eq!(breakdown.bracket_lines.len(), 1);
        assert_eq!(breakdown.bracket_lines[0].label, "<= 60.000 fCFA");
        assert_eq!(breakdown.total_income_tax, Decimal::ZERO);
        assert_eq!(breakdown.net_salary, dec!(57840));
    }

    #[test]
    fn one_franc_past_the_edge_opens_the_next_band() {
        let breakdown = evaluate(dec!(60001));

        assert_eq!(breakdown.bracket_lines.len(), 2);
        assert_eq!(breakdown.bracket_lines[1].taxable_amount, dec!(1));
        assert_eq!(breakdown.bracket_lines[1].tax, dec!(0.10));
    }

    #[test]
    fn salary_on_upper_edge_stops_scanning() {
        let breakdown = evaluate(dec!(250000));

        let labels: Vec<&str> = breakdown
            .bracket_lines
            .iter()
            .map(|line| line.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["<= 60.000 fCFA", "60.000 - 150.000 fCFA", "150.000 - 250.000 fCFA"]
        );
    }

    // =========================================================================
    // invariants
    // =========================================================================

    #[test]
    fn slices_sum_to_gross() {
        for gross in [dec!(1), dec!(60000), dec!(149999.99), dec!(500000), dec!(7333333.33)] {
            assert_eq!(evaluate(gross).allocated_income(), gross);
        }
    }

    #[test]
    fn totals_are_additive() {
        let breakdown = evaluate(dec!(1234567.89));

        assert_eq!(
            breakdown.total_deductions,
            breakdown.total_contributions + breakdown.total_income_tax
        );
        assert_eq!(
            breakdown.net_salary,
            breakdown.gross_salary - breakdown.total_deductions
        );
    }

    #[test]
    fn net_salary_shortcut_matches_full_breakdown() {
        let schedule = BracketSchedule::benin_2025();
        let evaluator = BracketEvaluator::new(&schedule);

        for gross in [dec!(0), dec!(60000), dec!(99418.7904), dec!(600000), dec!(5000000)] {
            assert_eq!(
                evaluator.net_salary(gross).unwrap(),
                evaluator.evaluate(gross).unwrap().net_salary
            );
        }
    }

    #[test]
    fn contribution_line_uses_schedule_label() {
        let schedule = BracketSchedule::benin_2025().with_contribution_label("CNSS");
        let breakdown = BracketEvaluator::new(&schedule)
            .evaluate(dec!(100000))
            .unwrap();

        assert_eq!(breakdown.contributions[0].label, "CNSS");
        assert_eq!(breakdown.contributions[0].rate, dec!(0.036));
    }
}
