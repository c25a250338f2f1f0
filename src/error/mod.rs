//! Error handling for the enrichment pipeline.

pub mod util;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the pipeline itself.
///
/// Failures from the underlying CSV, Arrow and Parquet layers are not wrapped
/// here; they propagate through [`Result`] with context attached.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// More population rows than distinct FIPS codes after filtering
    #[error("Total rows ({rows}) and unique FIPS_CODE counts ({unique}) do not match")]
    DuplicatePopulation { rows: usize, unique: usize },

    /// More case/death rows than distinct (date, fips) pairs
    #[error("Total rows ({rows}) and unique date+fips counts ({unique}) do not match")]
    DuplicateObservation { rows: usize, unique: usize },

    /// The lookup helper found more than one row for a single key
    #[error("Lookup for {geo_code} on {date} matched {matches} rows, expected at most one")]
    AmbiguousLookup {
        geo_code: String,
        date: NaiveDate,
        matches: usize,
    },

    /// A state or county code that is not a fixed-width digit string
    #[error("Malformed code in column '{column}': {value:?}")]
    MalformedCode { column: String, value: String },

    /// A date string none of the configured formats accept
    #[error("Unparseable date: {value:?}")]
    InvalidDate { value: String },

    /// A count below zero where the source reports running totals
    #[error("Negative count {value} in column '{column}' at row {row}")]
    InvalidCount {
        column: String,
        row: usize,
        value: i64,
    },

    /// A null where the pipeline needs a value
    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Column '{column}' not found")]
    ColumnNotFound { column: String },

    #[error("Column '{column}' is not of type {expected}")]
    InvalidDataType { column: String, expected: String },

    /// Source bytes that are not valid in the declared encoding
    #[error("Invalid UTF-8 at row {row}, column {column}")]
    Encoding { row: usize, column: usize },
}

/// Result type for pipeline operations
pub type Result<T> = anyhow::Result<T>;
