//! Join and cleanup of the two cleaned tables
//!
//! Case/death rows are matched to population rows on FIPS code. Rows whose
//! code appears in only one table are not reportable and are dropped.

use std::sync::Arc;

use arrow::array::{ArrayRef, UInt32Array};
use arrow::compute::take;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use log::debug;
use rustc_hash::FxHashMap;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::schema::cases::FIPS;
use crate::schema::population::FIPS_CODE;
use crate::schema::{enriched_schema, output_column_map};
use crate::utils::arrow::{get_column, string_column};

/// Join case/death observations with population estimates and shape the output
pub fn enrich(
    cases: &RecordBatch,
    population: &RecordBatch,
    config: &PipelineConfig,
) -> Result<RecordBatch> {
    let merged = inner_join(cases, population)?;
    cleanup_output(&merged, &config.population_column)
}

/// Inner join on `fips == FIPS_CODE`
///
/// The result keeps the row order of `cases` and carries every column of
/// both inputs, case columns first. Population codes are unique, so each
/// case row matches at most once.
pub fn inner_join(cases: &RecordBatch, population: &RecordBatch) -> Result<RecordBatch> {
    let codes = string_column(population, FIPS_CODE)?;
    let index: FxHashMap<&str, u32> = codes
        .iter()
        .enumerate()
        .filter_map(|(row, code)| code.map(|c| (c, row as u32)))
        .collect();

    let fips = string_column(cases, FIPS)?;
    let (left, right): (Vec<u32>, Vec<u32>) = fips
        .iter()
        .enumerate()
        .filter_map(|(row, code)| {
            code.and_then(|c| index.get(c))
                .map(|&matched| (row as u32, matched))
        })
        .unzip();

    debug!(
        "Join matched {} of {} observations; {} observations had no population row",
        left.len(),
        cases.num_rows(),
        cases.num_rows() - left.len()
    );

    let left = UInt32Array::from(left);
    let right = UInt32Array::from(right);

    let mut fields = Vec::with_capacity(cases.num_columns() + population.num_columns());
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(fields.capacity());
    for (field, column) in cases.schema().fields().iter().zip(cases.columns()) {
        fields.push(field.clone());
        columns.push(take(column, &left, None)?);
    }
    for (field, column) in population.schema().fields().iter().zip(population.columns()) {
        fields.push(field.clone());
        columns.push(take(column, &right, None)?);
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}

/// Drop extraneous columns and rename the rest to the output names
///
/// The result always has exactly the seven enriched columns, in order.
pub fn cleanup_output(merged: &RecordBatch, population_column: &str) -> Result<RecordBatch> {
    let columns = output_column_map(population_column)
        .iter()
        .map(|(source, _)| get_column(merged, source))
        .collect::<Result<Vec<_>>>()?;
    Ok(RecordBatch::try_new(enriched_schema(), columns)?)
}
