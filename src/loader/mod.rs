//! Source loaders
//!
//! Each loader reads one source file and returns either the raw table
//! (`raw = true`) or the cleaned, validated table the joiner expects.

pub mod cases;
pub mod population;

pub use cases::{derive_daily, load_cases, load_cases_from_reader, mark_boundaries};
pub use population::{load_population, load_population_from_reader};

use anyhow::Context;
use arrow::array::{Array, StringArray};

use crate::error::{PipelineError, Result};

/// The value at `row`, or `None` for a null cell
pub(crate) fn string_cell(array: &StringArray, row: usize) -> Option<&str> {
    array.is_valid(row).then(|| array.value(row))
}

/// Parse a non-null, non-negative integer count from a raw `Utf8` cell
pub(crate) fn parse_count(value: Option<&str>, column: &str, row: usize) -> Result<i64> {
    let value = value.ok_or_else(|| PipelineError::MissingValue {
        column: column.to_string(),
        row,
    })?;
    let count = value
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid integer {value:?} in column '{column}' at row {row}"))?;
    if count < 0 {
        return Err(PipelineError::InvalidCount {
            column: column.to_string(),
            row,
            value: count,
        }
        .into());
    }
    Ok(count)
}
