//! End-to-end checks of the calculator built from on-disk configuration and
//! schedule fixtures.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use salary_cli::render::{OutputFormat, render_breakdown, render_inversion, render_limits};
use salary_cli::{AppConfig, AppError, Calculator};
use salary_core::LimitError;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_config() -> AppConfig {
    let mut config = AppConfig::load(Some(&fixture("salary.toml"))).expect("fixture config should load");
    config.schedule_file = Some(fixture("flat_brackets.csv"));
    config
}

#[test]
fn test_fixture_config_is_loaded() {
    let config = fixture_config();

    assert_eq!(config.max_gross_salary, dec!(1000000));
    assert_eq!(config.contribution_rate, dec!(0.05));
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.solver.min_step, dec!(0));
    assert_eq!(config.solver.max_iterations, 100);
}

#[test]
fn test_custom_schedule_gross_to_net() {
    let calc = Calculator::from_config(&fixture_config()).unwrap();

    // 200000: contribution 10000, tax 20% of 100000.
    let report = calc.gross_to_net(dec!(200000)).unwrap();

    assert_eq!(report.total_contributions, 10000);
    assert_eq!(report.total_income_tax, 20000);
    assert_eq!(report.net_salary, 170000);
    assert_eq!(report.brackets.len(), 2);
    assert_eq!(report.brackets[1].rate, "20%");
}

#[test]
fn test_custom_schedule_limits_are_derived() {
    let calc = Calculator::from_config(&fixture_config()).unwrap();

    // 1000000 - 50000 - 180000
    assert_eq!(calc.limits().max_net(), dec!(770000));
}

#[test]
fn test_custom_schedule_net_to_gross_round_trip() {
    let calc = Calculator::from_config(&fixture_config()).unwrap();

    let report = calc.net_to_gross(dec!(170000)).unwrap();

    assert!(report.converged);
    assert!((report.required_gross - 200000).abs() <= 2, "{report:?}");
    assert!((report.net_salary - 170000).abs() <= 1, "{report:?}");
}

#[test]
fn test_over_limit_is_rejected() {
    let calc = Calculator::from_config(&fixture_config()).unwrap();

    let err = calc.net_to_gross(dec!(770001)).unwrap_err();

    assert!(matches!(err, AppError::Limit(LimitError::NetTooHigh { .. })));
    assert!(err.to_string().contains("770.000 fCFA"), "{err}");
}

#[test]
fn test_missing_schedule_file_is_reported() {
    let config = AppConfig {
        schedule_file: Some(fixture("missing.csv")),
        ..AppConfig::default()
    };

    let err = Calculator::from_config(&config).unwrap_err();

    assert!(matches!(err, AppError::Schedule(_)));
    assert!(err.to_string().contains("missing.csv"));
}

#[test]
fn test_builtin_schedule_renders_both_directions() {
    let calc = Calculator::from_config(&AppConfig::default()).unwrap();

    let gross = calc.gross_to_net(dec!(600000)).unwrap();
    let table = render_breakdown(&gross, OutputFormat::Table).unwrap();
    assert!(table.contains("Salaire net         : 476.900 fCFA"), "{table}");

    let net = calc.net_to_gross(dec!(476900)).unwrap();
    let json = render_inversion(&net, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["salaire_net_desire"], 476900);
    assert!(value["converge"].is_boolean());
}

#[test]
fn test_limits_report_describes_custom_schedule() {
    let calc = Calculator::from_config(&fixture_config()).unwrap();

    let json = render_limits(calc.limits(), calc.schedule(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["salaire_brut_max"], 1000000);
    assert_eq!(value["salaire_net_max"], 770000);
    assert_eq!(value["taux_cotisation_sociale"], "5.0%");
    assert_eq!(value["nombre_tranches"], 2);
}
