//! Text and JSON rendering of calculation reports.

use clap::ValueEnum;
use rust_decimal::Decimal;
use salary_core::format::{format_fcfa, format_rate};
use salary_core::{
    BracketReport, BracketSchedule, BreakdownReport, ContributionReport, InversionReport,
    SalaryLimits,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn fcfa(amount: i64) -> String {
    format_fcfa(Decimal::from(amount))
}

/// Renders a bordered grid. The first column is left-aligned, the others
/// right-aligned.
fn grid(
    headers: &[&str],
    rows: &[Vec<String>],
) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths.iter().fold(String::from("+"), |mut line, width| {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
        line
    });

    let format_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (i, (cell, width)) in cells.iter().zip(&widths).enumerate() {
            let pad = width - cell.chars().count();
            if i == 0 {
                line.push_str(&format!(" {cell}{} |", " ".repeat(pad)));
            } else {
                line.push_str(&format!(" {}{cell} |", " ".repeat(pad)));
            }
        }
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format_row(&header_cells));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    out
}

fn contributions_table(lines: &[ContributionReport]) -> String {
    let rows: Vec<Vec<String>> = lines
        .iter()
        .map(|line| vec![line.label.clone(), line.rate.clone(), fcfa(line.amount)])
        .collect();
    grid(&["Libellé", "Taux", "Montant"], &rows)
}

fn brackets_table(lines: &[BracketReport]) -> String {
    let rows: Vec<Vec<String>> = lines
        .iter()
        .map(|line| {
            vec![
                line.label.clone(),
                line.rate.clone(),
                fcfa(line.taxable_amount),
                fcfa(line.tax),
            ]
        })
        .collect();
    grid(&["Tranche", "Taux", "Montant imposable", "Impôt"], &rows)
}

fn sections(
    out: &mut String,
    contributions: &[ContributionReport],
    brackets: &[BracketReport],
) {
    out.push_str("\nCotisations sociales\n");
    out.push_str(&contributions_table(contributions));

    out.push_str("\nImpôt sur les traitements et salaires (ITS)\n");
    if brackets.is_empty() {
        out.push_str("Aucune tranche imposable\n");
    } else {
        out.push_str(&brackets_table(brackets));
    }
}

fn totals(
    out: &mut String,
    total_contributions: i64,
    total_income_tax: i64,
    total_deductions: i64,
    net_salary: i64,
) {
    out.push('\n');
    out.push_str(&format!("Total cotisations   : {}\n", fcfa(total_contributions)));
    out.push_str(&format!("Total impôt         : {}\n", fcfa(total_income_tax)));
    out.push_str(&format!("Total prélèvements  : {}\n", fcfa(total_deductions)));
    out.push_str(&format!("Salaire net         : {}\n", fcfa(net_salary)));
}

fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Renders a gross-to-net result.
pub fn render_breakdown(
    report: &BreakdownReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let mut out = format!("Salaire brut        : {}\n", fcfa(report.gross_salary));
    sections(&mut out, &report.contributions, &report.brackets);
    totals(
        &mut out,
        report.total_contributions,
        report.total_income_tax,
        report.total_deductions,
        report.net_salary,
    );
    Ok(out)
}

/// Renders a net-to-gross result.
pub fn render_inversion(
    report: &InversionReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let mut out = format!("Salaire net désiré  : {}\n", fcfa(report.desired_net));
    out.push_str(&format!("Salaire brut requis : {}\n", fcfa(report.required_gross)));
    if !report.converged {
        out.push_str("(estimation approchée : la recherche n'a pas convergé)\n");
    }
    sections(&mut out, &report.contributions, &report.brackets);
    totals(
        &mut out,
        report.total_contributions,
        report.total_income_tax,
        report.total_deductions,
        report.net_salary,
    );
    Ok(out)
}

#[derive(Serialize)]
struct LimitsReport {
    salaire_brut_max: i64,
    salaire_net_max: i64,
    taux_cotisation_sociale: String,
    nombre_tranches: usize,
}

/// Renders the configured ceilings and the shape of the schedule in use.
pub fn render_limits(
    limits: &SalaryLimits,
    schedule: &BracketSchedule,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let report = LimitsReport {
        salaire_brut_max: salary_core::whole_units(limits.max_gross()),
        salaire_net_max: salary_core::whole_units(limits.max_net()),
        taux_cotisation_sociale: format_rate(schedule.contribution_rate(), 1),
        nombre_tranches: schedule.brackets().len(),
    };

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Table => Ok(format!(
            "Salaire brut maximum : {}\n\
             Salaire net maximum  : {}\n\
             Taux de cotisation   : {}\n\
             Tranches d'impôt     : {}\n",
            fcfa(report.salaire_brut_max),
            fcfa(report.salaire_net_max),
            report.taux_cotisation_sociale,
            report.nombre_tranches
        )),
    }
}
