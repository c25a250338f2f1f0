//! Point lookups into the enriched table
//!
//! Used to check the pipeline end to end: given a FIPS code and a date,
//! return every field of the one matching row.

use std::collections::BTreeMap;

use arrow::array::{Array, ArrayRef, Date32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{PipelineError, Result};
use crate::schema::enriched::{DATE, GEO_CODE};
use crate::utils::arrow::{
    date32_to_naive_date, downcast_array, get_column, naive_date_to_date32, string_column,
};

/// A single cell of the enriched table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Int(i64),
    Null,
}

impl FieldValue {
    /// The integer value, if this is an integer cell
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }
}

/// Look up the row for a FIPS code and date
///
/// Returns an empty map when no row matches and a map of every column,
/// keyed by output name, when exactly one does.
///
/// # Errors
/// [`PipelineError::AmbiguousLookup`] when more than one row matches, which
/// means the table's uniqueness invariant was broken upstream.
pub fn fips_lookup(
    geo_code: &str,
    date: NaiveDate,
    table: &RecordBatch,
) -> Result<BTreeMap<String, FieldValue>> {
    let codes = string_column(table, GEO_CODE)?;
    let dates = get_column(table, DATE)?;
    let dates = downcast_array::<Date32Array>(&dates, DATE, "Date32")?;
    let target = naive_date_to_date32(date);

    let matches: Vec<usize> = (0..table.num_rows())
        .filter(|&row| {
            codes.is_valid(row)
                && dates.is_valid(row)
                && codes.value(row) == geo_code
                && dates.value(row) == target
        })
        .collect();

    match matches.as_slice() {
        [] => Ok(BTreeMap::new()),
        [row] => row_to_map(table, *row),
        _ => Err(PipelineError::AmbiguousLookup {
            geo_code: geo_code.to_string(),
            date,
            matches: matches.len(),
        }
        .into()),
    }
}

fn row_to_map(table: &RecordBatch, row: usize) -> Result<BTreeMap<String, FieldValue>> {
    let schema = table.schema();
    let mut values = BTreeMap::new();
    for (field, column) in schema.fields().iter().zip(table.columns()) {
        values.insert(field.name().clone(), field_value(column, row, field.name())?);
    }
    Ok(values)
}

fn field_value(array: &ArrayRef, row: usize, column: &str) -> Result<FieldValue> {
    if array.is_null(row) {
        return Ok(FieldValue::Null);
    }
    let value = match array.data_type() {
        DataType::Utf8 => {
            let text = downcast_array::<StringArray>(array, column, "Utf8")?.value(row);
            FieldValue::Text(text.to_string())
        }
        DataType::Int64 => {
            FieldValue::Int(downcast_array::<Int64Array>(array, column, "Int64")?.value(row))
        }
        DataType::Date32 => {
            let days = downcast_array::<Date32Array>(array, column, "Date32")?.value(row);
            let date = date32_to_naive_date(days).ok_or_else(|| PipelineError::InvalidDataType {
                column: column.to_string(),
                expected: "Date32 within the calendar range".to_string(),
            })?;
            FieldValue::Date(date)
        }
        _ => {
            return Err(PipelineError::InvalidDataType {
                column: column.to_string(),
                expected: "Utf8, Int64 or Date32".to_string(),
            }
            .into());
        }
    };
    Ok(value)
}
