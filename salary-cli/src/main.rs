use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;

use salary_cli::config::AppConfig;
use salary_cli::logging::init_logging;
use salary_cli::render::{self, OutputFormat};
use salary_cli::utils::parse_amount;
use salary_cli::Calculator;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Benin 2025 salary calculator.
///
/// Computes the net salary for a gross amount (CNSS contribution and ITS
/// brackets), or estimates the gross salary needed for a desired net.
#[derive(Debug, Parser)]
#[command(name = "salary-calc", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// CSV bracket schedule replacing the built-in table.
    #[arg(long, global = true)]
    schedule: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log level or filter directives (overridden by `RUST_LOG`).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append timestamped log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Gross salary ceiling, in fCFA.
    #[arg(long, global = true, value_parser = parse_amount)]
    max_gross: Option<Decimal>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Gross to net breakdown.
    Gross {
        /// Gross monthly salary, e.g. `100000` or `1,500,000`.
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Decimal,
    },

    /// Net to gross estimate.
    Net {
        /// Desired net monthly salary.
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Decimal,
    },

    /// Print the gross and net ceilings.
    Limits,
}

/// File, then environment, then flags.
fn resolve_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?
        .apply_env_overrides(|key| std::env::var(key).ok())?;

    if let Some(path) = &cli.schedule {
        config.schedule_file = Some(path.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(path) = &cli.log_file {
        config.log_file = Some(path.clone());
    }
    if let Some(max_gross) = cli.max_gross {
        config.max_gross_salary = max_gross;
    }

    Ok(config)
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli).context("failed to load configuration")?;
    init_logging(&config.log_level, config.log_file.as_deref())?;
    debug!(?config, "configuration resolved");

    let calculator = Calculator::from_config(&config)?;

    let output = match cli.command {
        Command::Gross { amount } => {
            let report = calculator.gross_to_net(amount)?;
            render::render_breakdown(&report, cli.format)?
        }
        Command::Net { amount } => {
            let report = calculator.net_to_gross(amount)?;
            render::render_inversion(&report, cli.format)?
        }
        Command::Limits => {
            render::render_limits(calculator.limits(), calculator.schedule(), cli.format)?
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
