//! Enriched output schema definitions
//!
//! The persisted table has exactly these seven columns, in this order,
//! whatever else the two sources carried.

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

use super::cases;

pub const GEO_CODE: &str = "geo_code";
pub const DATE: &str = "date";
pub const DAILY_CASES: &str = "daily_cases";
pub const CUMULATIVE_CASES: &str = "cumulative_cases";
pub const DAILY_DEATHS: &str = "daily_deaths";
pub const CUMULATIVE_DEATHS: &str = "cumulative_deaths";
pub const POPULATION_ESTIMATE: &str = "population_estimate";

/// Output column names in persisted order
pub const OUTPUT_COLUMNS: [&str; 7] = [
    GEO_CODE,
    DATE,
    DAILY_CASES,
    CUMULATIVE_CASES,
    DAILY_DEATHS,
    CUMULATIVE_DEATHS,
    POPULATION_ESTIMATE,
];

/// Source column to output column mapping, in output order
///
/// The population estimate's source name depends on the vintage, so it is
/// passed in.
#[must_use]
pub fn output_column_map(population_column: &str) -> [(&str, &'static str); 7] {
    [
        (cases::FIPS, GEO_CODE),
        (cases::DATE, DATE),
        (cases::DAILY_CASES, DAILY_CASES),
        (cases::CASES, CUMULATIVE_CASES),
        (cases::DAILY_DEATHS, DAILY_DEATHS),
        (cases::DEATHS, CUMULATIVE_DEATHS),
        (population_column, POPULATION_ESTIMATE),
    ]
}

/// Get the Arrow schema of the enriched output table
#[must_use]
pub fn enriched_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(GEO_CODE, DataType::Utf8, false),
        Field::new(DATE, DataType::Date32, false),
        Field::new(DAILY_CASES, DataType::Int64, false),
        Field::new(CUMULATIVE_CASES, DataType::Int64, false),
        Field::new(DAILY_DEATHS, DataType::Int64, false),
        Field::new(CUMULATIVE_DEATHS, DataType::Int64, false),
        Field::new(POPULATION_ESTIMATE, DataType::Int64, false),
    ]))
}
