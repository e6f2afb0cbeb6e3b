//! Command-line front end for the salary calculator: configuration,
//! logging setup and rendering around `salary-core`.

pub mod app;
pub mod config;
pub mod logging;
pub mod render;
pub mod utils;

pub use app::{AppError, Calculator, Mode};
pub use config::{AppConfig, ConfigError};
pub use render::OutputFormat;
