use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax owed on the slice of salary that falls inside one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketLine {
    pub label: String,
    pub rate: Decimal,
    pub taxable_amount: Decimal,
    pub tax: Decimal,
}

/// A flat levy on the whole gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionLine {
    pub label: String,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Full result of evaluating one gross salary.
///
/// Every amount is exact; rounding to the currency unit only happens when a
/// [`BreakdownReport`](crate::models::BreakdownReport) is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub gross_salary: Decimal,
    pub contributions: Vec<ContributionLine>,
    pub bracket_lines: Vec<BracketLine>,
    pub total_contributions: Decimal,
    pub total_income_tax: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,
}

impl Breakdown {
    /// Sum of the taxable slices across all emitted bracket lines.
    pub fn allocated_income(&self) -> Decimal {
        self.bracket_lines.iter().map(|line| line.taxable_amount).sum()
    }
}
