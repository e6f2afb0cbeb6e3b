//! Wire-facing reports.
//!
//! These are the only place where amounts are rounded to the currency unit.
//! Field names are kept as consumers of the existing JSON payload expect them.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::{BracketLine, Breakdown, ContributionLine, InversionResult};
use crate::calculations::common::round_to_unit;
use crate::format::format_rate;

/// Rounds to the currency unit and converts to an integer, saturating at the
/// `i64` range.
pub fn whole_units(value: Decimal) -> i64 {
    let rounded = round_to_unit(value);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionReport {
    #[serde(rename = "libelle")]
    pub label: String,
    #[serde(rename = "taux")]
    pub rate: String,
    #[serde(rename = "montant")]
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketReport {
    #[serde(rename = "tranche")]
    pub label: String,
    #[serde(rename = "taux")]
    pub rate: String,
    #[serde(rename = "montant_imposable")]
    pub taxable_amount: i64,
    #[serde(rename = "impot")]
    pub tax: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownReport {
    #[serde(rename = "salaire_brut")]
    pub gross_salary: i64,
    #[serde(rename = "details_cotisations")]
    pub contributions: Vec<ContributionReport>,
    #[serde(rename = "details_impot")]
    pub brackets: Vec<BracketReport>,
    #[serde(rename = "total_cotisations")]
    pub total_contributions: i64,
    #[serde(rename = "total_impot")]
    pub total_income_tax: i64,
    #[serde(rename = "total_prelevements")]
    pub total_deductions: i64,
    #[serde(rename = "salaire_net")]
    pub net_salary: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InversionReport {
    #[serde(rename = "salaire_net_desire")]
    pub desired_net: i64,
    #[serde(rename = "salaire_brut_requis")]
    pub required_gross: i64,
    #[serde(rename = "details_cotisations")]
    pub contributions: Vec<ContributionReport>,
    #[serde(rename = "details_impot")]
    pub brackets: Vec<BracketReport>,
    #[serde(rename = "total_cotisations")]
    pub total_contributions: i64,
    #[serde(rename = "total_impot")]
    pub total_income_tax: i64,
    #[serde(rename = "total_prelevements")]
    pub total_deductions: i64,
    #[serde(rename = "salaire_net")]
    pub net_salary: i64,
    #[serde(rename = "converge")]
    pub converged: bool,
}

impl From<&ContributionLine> for ContributionReport {
    fn from(line: &ContributionLine) -> Self {
        Self {
            label: line.label.clone(),
            rate: format_rate(line.rate, 1),
            amount: whole_units(line.amount),
        }
    }
}

impl From<&BracketLine> for BracketReport {
    fn from(line: &BracketLine) -> Self {
        Self {
            label: line.label.clone(),
            rate: format_rate(line.rate, 0),
            taxable_amount: whole_units(line.taxable_amount),
            tax: whole_units(line.tax),
        }
    }
}

impl From<&Breakdown> for BreakdownReport {
    fn from(breakdown: &Breakdown) -> Self {
        let total_contributions = whole_units(breakdown.total_contributions);
        let total_income_tax = whole_units(breakdown.total_income_tax);

        Self {
            gross_salary: whole_units(breakdown.gross_salary),
            contributions: breakdown.contributions.iter().map(Into::into).collect(),
            brackets: breakdown.bracket_lines.iter().map(Into::into).collect(),
            total_contributions,
            total_income_tax,
            // Summed after rounding so the wire totals stay additive.
            total_deductions: total_contributions.saturating_add(total_income_tax),
            net_salary: whole_units(breakdown.net_salary),
        }
    }
}

impl From<&InversionResult> for InversionReport {
    fn from(result: &InversionResult) -> Self {
        let breakdown = BreakdownReport::from(&result.breakdown);

        Self {
            desired_net: whole_units(result.desired_net),
            required_gross: whole_units(result.gross_salary),
            contributions: breakdown.contributions,
            brackets: breakdown.brackets,
            total_contributions: breakdown.total_contributions,
            total_income_tax: breakdown.total_income_tax,
            total_deductions: breakdown.total_deductions,
            net_salary: breakdown.net_salary,
            converged: result.is_converged(),
        }
    }
}
