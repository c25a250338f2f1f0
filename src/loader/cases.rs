//! NYT county case/death loader
//!
//! The source reports cumulative counts per county per day. Cleaning sorts
//! the observations by `(fips, date)` and derives daily counts from the
//! differences between consecutive rows of the same county.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, ensure};
use arrow::array::{Array, ArrayRef, BooleanArray, Date32Array, Int64Array, UInt32Array};
use arrow::compute::{filter_record_batch, is_not_null, take};
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::loader::{parse_count, string_cell};
use crate::reader::{read_csv, read_csv_path};
use crate::schema::cases::{CASES, COUNTY, DATE, DEATHS, FIPS, STATE, cases_schema};
use crate::utils::arrow::{naive_date_to_date32, string_column};
use crate::utils::dates::parse_date_string;

/// Load NYT county case/death counts
///
/// # Arguments
/// * `path` - Path to the source CSV file
/// * `raw` - If true, return the table before any transformation
/// * `config` - Encoding and date formats to use
///
/// # Errors
/// Fails with [`PipelineError::DuplicateObservation`] when a county reports
/// twice for the same date.
pub fn load_cases(path: &Path, raw: bool, config: &PipelineConfig) -> Result<RecordBatch> {
    let table = read_csv_path(path, config.cases_encoding)?;
    if raw {
        return Ok(table);
    }
    clean_cases(&table, config)
}

/// Load NYT county case/death counts from any reader
pub fn load_cases_from_reader<R: Read>(
    reader: R,
    raw: bool,
    config: &PipelineConfig,
) -> Result<RecordBatch> {
    let table = read_csv(reader, config.cases_encoding)?;
    if raw {
        return Ok(table);
    }
    clean_cases(&table, config)
}

/// Flag the first row of every run of equal codes
///
/// `codes` must already be sorted so that each code's rows are contiguous.
#[must_use]
pub fn mark_boundaries<S: AsRef<str>>(codes: &[S]) -> Vec<bool> {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| i == 0 || codes[i - 1].as_ref() != code.as_ref())
        .collect()
}

/// Derive daily values from a cumulative series
///
/// Boundary rows take the cumulative value itself; every other row takes the
/// difference from the row before it. Decreases come out negative.
///
/// # Errors
/// Fails when the slices differ in length, when the first row is not a
/// boundary, or when a difference does not fit in an `i64`.
pub fn derive_daily(boundaries: &[bool], cumulative: &[i64]) -> Result<Vec<i64>> {
    ensure!(
        boundaries.len() == cumulative.len(),
        "Boundary flags ({}) and cumulative values ({}) differ in length",
        boundaries.len(),
        cumulative.len()
    );
    ensure!(
        boundaries.first().is_none_or(|&first| first),
        "The first row of a cumulative series must be a boundary"
    );

    let mut daily = Vec::with_capacity(cumulative.len());
    for (i, (&boundary, &value)) in boundaries.iter().zip(cumulative).enumerate() {
        if boundary {
            daily.push(value);
        } else {
            let previous = cumulative[i - 1];
            let delta = value
                .checked_sub(previous)
                .ok_or_else(|| anyhow!("Daily value at row {i} overflows ({value} - {previous})"))?;
            daily.push(delta);
        }
    }
    Ok(daily)
}

/// Turn a raw case/death table into the sorted, delta-derived table
pub fn clean_cases(raw: &RecordBatch, config: &PipelineConfig) -> Result<RecordBatch> {
    let present = is_not_null(&string_column(raw, FIPS)?)?;
    let kept = filter_record_batch(raw, &present)?;
    if kept.num_rows() < raw.num_rows() {
        debug!(
            "Dropped {} rows without a FIPS code",
            raw.num_rows() - kept.num_rows()
        );
    }

    let rows = kept.num_rows();
    let fips = string_column(&kept, FIPS)?;
    let date_strings = string_column(&kept, DATE)?;

    let mut dates = Vec::with_capacity(rows);
    let mut cases = Vec::with_capacity(rows);
    let mut deaths = Vec::with_capacity(rows);
    let case_strings = string_column(&kept, CASES)?;
    let death_strings = string_column(&kept, DEATHS)?;

    for row in 0..rows {
        if date_strings.is_null(row) {
            return Err(PipelineError::MissingValue {
                column: DATE.to_string(),
                row,
            }
            .into());
        }
        let value = date_strings.value(row);
        let date = parse_date_string(value, &config.date_formats).ok_or_else(|| {
            PipelineError::InvalidDate {
                value: value.to_string(),
            }
        })?;
        dates.push(naive_date_to_date32(date));

        cases.push(parse_count(string_cell(&case_strings, row), CASES, row)?);
        deaths.push(parse_count(string_cell(&death_strings, row), DEATHS, row)?);
    }

    // Stable: rows with equal keys keep their source order.
    let order: Vec<u32> = (0..rows)
        .sorted_by(|&a, &b| {
            fips.value(a)
                .cmp(fips.value(b))
                .then_with(|| dates[a].cmp(&dates[b]))
        })
        .map(|i| i as u32)
        .collect();

    let sorted_fips: Vec<&str> = order.iter().map(|&i| fips.value(i as usize)).collect();
    let sorted_dates: Vec<i32> = order.iter().map(|&i| dates[i as usize]).collect();
    let sorted_cases: Vec<i64> = order.iter().map(|&i| cases[i as usize]).collect();
    let sorted_deaths: Vec<i64> = order.iter().map(|&i| deaths[i as usize]).collect();

    let boundaries = mark_boundaries(&sorted_fips);
    let daily_cases = derive_daily(&boundaries, &sorted_cases)?;
    let daily_deaths = derive_daily(&boundaries, &sorted_deaths)?;

    let unique = sorted_dates
        .iter()
        .zip(&sorted_fips)
        .collect::<FxHashSet<_>>()
        .len();
    if unique != rows {
        return Err(PipelineError::DuplicateObservation { rows, unique }.into());
    }

    let negative = daily_cases.iter().chain(&daily_deaths).filter(|&&d| d < 0).count();
    if negative > 0 {
        info!("{negative} daily values are negative (downward revisions), kept as reported");
    }

    let indices = UInt32Array::from(order);
    let county = take(&string_column(&kept, COUNTY)?, &indices, None)?;
    let state = take(&string_column(&kept, STATE)?, &indices, None)?;
    let fips = take(&fips, &indices, None)?;

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Date32Array::from(sorted_dates)) as ArrayRef,
        county,
        state,
        fips,
        Arc::new(Int64Array::from(sorted_cases)),
        Arc::new(Int64Array::from(sorted_deaths)),
        Arc::new(BooleanArray::from(boundaries)),
        Arc::new(Int64Array::from(daily_cases)),
        Arc::new(Int64Array::from(daily_deaths)),
    ];

    info!("Loaded {rows} county-day observations");
    Ok(RecordBatch::try_new(cases_schema(), columns)?)
}
