//! Census county population loader

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Int64Array, StringArray, StringBuilder};
use arrow::compute::filter_record_batch;
use arrow::record_batch::RecordBatch;
use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::loader::{parse_count, string_cell};
use crate::reader::{read_csv, read_csv_path};
use crate::schema::population::{
    COUNTY, COUNTY_CODE_WIDTH, CTYNAME, FIPS_CODE, STATE, STATE_CODE_WIDTH, STNAME, SUMLEV,
    population_schema,
};
use crate::utils::arrow::string_column;

/// Load census population estimates by county
///
/// # Arguments
/// * `path` - Path to the source CSV file
/// * `raw` - If true, return the table before any transformation
/// * `config` - Level code, population column and encoding to use
///
/// # Errors
/// Fails with [`PipelineError::DuplicatePopulation`] when two county rows
/// share a FIPS code.
pub fn load_population(path: &Path, raw: bool, config: &PipelineConfig) -> Result<RecordBatch> {
    let table = read_csv_path(path, config.population_encoding)?;
    if raw {
        return Ok(table);
    }
    clean_population(&table, config)
}

/// Load census population estimates from any reader
pub fn load_population_from_reader<R: Read>(
    reader: R,
    raw: bool,
    config: &PipelineConfig,
) -> Result<RecordBatch> {
    let table = read_csv(reader, config.population_encoding)?;
    if raw {
        return Ok(table);
    }
    clean_population(&table, config)
}

/// Check that a code is exactly `width` ASCII digits
fn validate_code<'a>(
    value: Option<&'a str>,
    width: usize,
    column: &str,
    row: usize,
) -> Result<&'a str> {
    let value = value.ok_or_else(|| PipelineError::MissingValue {
        column: column.to_string(),
        row,
    })?;
    if value.len() != width || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PipelineError::MalformedCode {
            column: column.to_string(),
            value: value.to_string(),
        }
        .into());
    }
    Ok(value)
}

/// Turn a raw population table into one row per county keyed by `FIPS_CODE`
pub fn clean_population(raw: &RecordBatch, config: &PipelineConfig) -> Result<RecordBatch> {
    let level = string_column(raw, SUMLEV)?;
    let is_county: BooleanArray = level
        .iter()
        .map(|v| Some(v == Some(config.county_level.as_str())))
        .collect();
    let counties = filter_record_batch(raw, &is_county)?;
    debug!(
        "Kept {} of {} rows at summary level {}",
        counties.num_rows(),
        raw.num_rows(),
        config.county_level
    );

    let state = string_column(&counties, STATE)?;
    let county = string_column(&counties, COUNTY)?;
    let stname = string_column(&counties, STNAME)?;
    let ctyname = string_column(&counties, CTYNAME)?;
    let estimate = string_column(&counties, &config.population_column)?;

    let rows = counties.num_rows();
    let mut fips =
        StringBuilder::with_capacity(rows, rows * (STATE_CODE_WIDTH + COUNTY_CODE_WIDTH));
    let mut population = Vec::with_capacity(rows);

    for row in 0..rows {
        let s = validate_code(string_cell(&state, row), STATE_CODE_WIDTH, STATE, row)?;
        let c = validate_code(string_cell(&county, row), COUNTY_CODE_WIDTH, COUNTY, row)?;
        fips.append_value(format!("{s}{c}"));

        let value = string_cell(&estimate, row);
        population.push(parse_count(value, &config.population_column, row)?);
    }
    let fips = fips.finish();

    let unique = fips.iter().flatten().collect::<FxHashSet<_>>().len();
    if unique != rows {
        return Err(PipelineError::DuplicatePopulation { rows, unique }.into());
    }

    info!("Loaded population estimates for {rows} counties");

    let columns: Vec<ArrayRef> = vec![
        Arc::new(state) as ArrayRef,
        Arc::new(county),
        Arc::new(stname),
        Arc::new(ctyname),
        Arc::new(Int64Array::from(population)),
        Arc::new(fips) as ArrayRef,
    ];
    Ok(RecordBatch::try_new(
        population_schema(&config.population_column),
        columns,
    )?)
}

/// The join key column of a cleaned population table
pub fn fips_codes(population: &RecordBatch) -> Result<StringArray> {
    string_column(population, FIPS_CODE)
}
