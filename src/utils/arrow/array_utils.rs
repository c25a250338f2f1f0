//! Utilities for working with Arrow arrays.
//!
//! Column lookup and downcasting with errors that name the offending column.

use arrow::array::{Array, ArrayRef, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::error::{PipelineError, Result};

/// Get a column from a record batch by name
///
/// # Errors
/// Returns [`PipelineError::ColumnNotFound`] if the batch has no such column
pub fn get_column(batch: &RecordBatch, column_name: &str) -> Result<ArrayRef> {
    batch.column_by_name(column_name).cloned().ok_or_else(|| {
        PipelineError::ColumnNotFound {
            column: column_name.to_string(),
        }
        .into()
    })
}

/// Downcast a column to a specific array type with clear error messages
///
/// # Arguments
///
/// * `array` - The array reference to downcast
/// * `column_name` - The name of the column (for error messages)
/// * `expected_type_name` - A human-readable name of the expected type (for error messages)
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &str,
) -> Result<&'a A> {
    array.as_any().downcast_ref::<A>().ok_or_else(|| {
        PipelineError::InvalidDataType {
            column: column_name.to_string(),
            expected: expected_type_name.to_string(),
        }
        .into()
    })
}

/// Fetch a `Utf8` column as an owned `StringArray`
pub fn string_column(batch: &RecordBatch, column_name: &str) -> Result<StringArray> {
    let array = get_column(batch, column_name)?;
    Ok(downcast_array::<StringArray>(&array, column_name, "Utf8")?.clone())
}

/// Fetch an `Int64` column as an owned `Int64Array`
pub fn int64_column(batch: &RecordBatch, column_name: &str) -> Result<Int64Array> {
    let array = get_column(batch, column_name)?;
    Ok(downcast_array::<Int64Array>(&array, column_name, "Int64")?.clone())
}
