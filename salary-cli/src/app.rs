use rust_decimal::Decimal;
use salary_core::{
    BracketEvaluator, BracketSchedule, BreakdownReport, CalculationError, InverseSolver,
    InversionReport, LimitError, SalaryLimits, SolverConfig,
};
use salary_data::{ScheduleLoader, ScheduleLoaderError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::AppConfig;

/// Direction of a calculation, as recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    GrossToNet,
    NetToGross,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::GrossToNet => "brut",
            Mode::NetToGross => "net",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error(transparent)]
    Limit(#[from] LimitError),

    #[error("cannot load bracket schedule: {0}")]
    Schedule(#[from] ScheduleLoaderError),
}

/// Schedule, solver settings and limits resolved from the configuration.
#[derive(Debug, Clone)]
pub struct Calculator {
    schedule: BracketSchedule,
    solver_config: SolverConfig,
    limits: SalaryLimits,
}

impl Calculator {
    /// Loads the bracket schedule named by `config` (or the built-in 2025
    /// table) and derives the salary limits for it.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let schedule = match &config.schedule_file {
            Some(path) => {
                debug!(path = %path.display(), "loading bracket schedule");
                ScheduleLoader::load_from_path(path, config.contribution_rate)?
            }
            None => BracketSchedule::new(
                BracketSchedule::benin_2025().brackets().to_vec(),
                config.contribution_rate,
            )
            .map_err(ScheduleLoaderError::from)?,
        };

        Self::new(schedule, config.solver, config.max_gross_salary)
    }

    pub fn new(
        schedule: BracketSchedule,
        solver_config: SolverConfig,
        max_gross_salary: Decimal,
    ) -> Result<Self, AppError> {
        let limits = SalaryLimits::derive(&BracketEvaluator::new(&schedule), max_gross_salary)?;

        Ok(Self {
            schedule,
            solver_config,
            limits,
        })
    }

    pub fn schedule(&self) -> &BracketSchedule {
        &self.schedule
    }

    pub fn limits(&self) -> &SalaryLimits {
        &self.limits
    }

    /// Gross to net, checked against the gross ceiling.
    pub fn gross_to_net(
        &self,
        gross: Decimal,
    ) -> Result<BreakdownReport, AppError> {
        let result = self.checked_gross_to_net(gross);
        audit(Mode::GrossToNet, gross, result.as_ref().err());
        result
    }

    /// Net to gross, checked against the derived net ceiling.
    pub fn net_to_gross(
        &self,
        net: Decimal,
    ) -> Result<InversionReport, AppError> {
        let result = self.checked_net_to_gross(net);
        audit(Mode::NetToGross, net, result.as_ref().err());
        result
    }

    fn checked_gross_to_net(
        &self,
        gross: Decimal,
    ) -> Result<BreakdownReport, AppError> {
        self.limits.check_gross(gross)?;
        let breakdown = BracketEvaluator::new(&self.schedule).evaluate(gross)?;

        Ok(BreakdownReport::from(&breakdown))
    }

    fn checked_net_to_gross(
        &self,
        net: Decimal,
    ) -> Result<InversionReport, AppError> {
        self.limits.check_net(net)?;
        let result =
            InverseSolver::new(&self.schedule, self.solver_config).solve_gross_for_net(net)?;

        Ok(InversionReport::from(&result))
    }
}

/// One record per calculation, successful or not.
fn audit(
    mode: Mode,
    amount: Decimal,
    error: Option<&AppError>,
) {
    match error {
        None => info!(mode = mode.as_str(), %amount, status = "succes", "calculation"),
        Some(err) => warn!(
            mode = mode.as_str(),
            %amount,
            status = "echec",
            error = %err,
            "calculation"
        ),
    }
}
