//! Loading bracket schedules from CSV files.
//!
//! ## CSV Format
//!
//! | Column        | Required | Type    | Notes                                  |
//! |---------------|----------|---------|----------------------------------------|
//! | `lower_bound` | yes      | decimal | Start of the band, inclusive           |
//! | `upper_bound` | yes      | decimal | End of the band, exclusive; empty cell for the unbounded top band |
//! | `rate`        | yes      | decimal | Marginal rate as a fraction, e.g. `0.10` |
//!
//! ```csv
//! lower_bound,upper_bound,rate
//! 0,60000,0
//! 60000,150000,0.10
//! 150000,250000,0.15
//! 250000,500000,0.19
//! 500000,,0.30
//! ```

mod loader;

pub use loader::{BracketRecord, ScheduleLoader, ScheduleLoaderError};
