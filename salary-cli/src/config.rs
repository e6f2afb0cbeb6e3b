//! Application configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! TOML file, environment variables, then command-line flags (applied by the
//! binary).
//!
//! ```toml
//! max_gross_salary = 15000000
//! contribution_rate = "0.036"
//! schedule_file = "brackets.csv"
//! log_level = "info"
//! log_file = "salary-calc.log"
//!
//! [solver]
//! tolerance = 1
//! max_iterations = 100
//! min_step = 1000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salary_core::{DEFAULT_MAX_GROSS_SALARY, SolverConfig};
use serde::Deserialize;
use thiserror::Error;

use crate::utils::parse_amount;

/// Environment variable overriding [`AppConfig::max_gross_salary`].
pub const MAX_GROSS_SALARY_ENV: &str = "MAX_GROSS_SALARY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value '{value}' for {key}")]
    InvalidOverride { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Largest gross salary accepted; the net ceiling is derived from it.
    pub max_gross_salary: Decimal,

    /// Social-contribution rate levied on the whole gross salary.
    pub contribution_rate: Decimal,

    /// CSV bracket table replacing the built-in 2025 schedule.
    pub schedule_file: Option<PathBuf>,

    pub log_level: String,

    /// Append timestamped log records (including one per calculation) here.
    pub log_file: Option<PathBuf>,

    pub solver: SolverConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_gross_salary: DEFAULT_MAX_GROSS_SALARY,
            contribution_rate: dec!(0.036),
            schedule_file: None,
            log_level: "info".to_string(),
            log_file: None,
            solver: SolverConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration file at `path`, or the defaults when no path
    /// is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::from_toml(&text)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Applies environment overrides read through `lookup`.
    pub fn apply_env_overrides<F>(
        mut self,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(MAX_GROSS_SALARY_ENV) {
            self.max_gross_salary =
                parse_amount(&value).map_err(|_| ConfigError::InvalidOverride {
                    key: MAX_GROSS_SALARY_ENV,
                    value,
                })?;
        }
        Ok(self)
    }
}
