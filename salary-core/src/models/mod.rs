mod bracket_schedule;
mod breakdown;
mod inversion;
mod report;
mod tax_bracket;

pub use bracket_schedule::{BracketSchedule, DEFAULT_CONTRIBUTION_LABEL, ScheduleError};
pub use breakdown::{BracketLine, Breakdown, ContributionLine};
pub use inversion::{Convergence, InversionResult};
pub use report::{BracketReport, BreakdownReport, ContributionReport, InversionReport, whole_units};
pub use tax_bracket::TaxBracket;
