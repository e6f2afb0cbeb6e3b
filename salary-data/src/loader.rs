use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use salary_core::{BracketSchedule, ScheduleError, TaxBracket};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a bracket schedule.
#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a bracket schedule CSV file.
///
/// - `lower_bound`: Start of the band, inclusive
/// - `upper_bound`: End of the band, exclusive (empty for unbounded)
/// - `rate`: The marginal rate as a decimal (e.g., 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl From<&BracketRecord> for TaxBracket {
    fn from(record: &BracketRecord) -> Self {
        TaxBracket::new(record.lower_bound, record.upper_bound, record.rate)
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket schedules stored as CSV.
///
/// Rows may appear in any order; they are sorted by `lower_bound` before the
/// schedule is validated.
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse bracket records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Turn parsed records into a validated [`BracketSchedule`].
    pub fn build(
        records: &[BracketRecord],
        contribution_rate: Decimal,
    ) -> Result<BracketSchedule, ScheduleLoaderError> {
        let mut brackets: Vec<TaxBracket> = records.iter().map(TaxBracket::from).collect();
        brackets.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));

        Ok(BracketSchedule::new(brackets, contribution_rate)?)
    }

    /// Read, parse and validate a schedule file in one go.
    pub fn load_from_path(
        path: &Path,
        contribution_rate: Decimal,
    ) -> Result<BracketSchedule, ScheduleLoaderError> {
        let file = File::open(path).map_err(|source| ScheduleLoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let records = Self::parse(file)?;
        debug!(path = %path.display(), records = records.len(), "parsed bracket schedule");

        Self::build(&records, contribution_rate)
    }
}
