//! NYT county case/death schema definitions

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

pub const DATE: &str = "date";
pub const COUNTY: &str = "county";
pub const STATE: &str = "state";
pub const FIPS: &str = "fips";
pub const CASES: &str = "cases";
pub const DEATHS: &str = "deaths";
/// True on the first row of each FIPS code after sorting
pub const NEW_FIPS: &str = "new_fips";
pub const DAILY_CASES: &str = "daily_cases";
pub const DAILY_DEATHS: &str = "daily_deaths";

/// Get the Arrow schema of the cleaned case/death table
#[must_use]
pub fn cases_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(DATE, DataType::Date32, false),
        Field::new(COUNTY, DataType::Utf8, true),
        Field::new(STATE, DataType::Utf8, true),
        Field::new(FIPS, DataType::Utf8, false),
        Field::new(CASES, DataType::Int64, false),
        Field::new(DEATHS, DataType::Int64, false),
        Field::new(NEW_FIPS, DataType::Boolean, false),
        Field::new(DAILY_CASES, DataType::Int64, false),
        Field::new(DAILY_DEATHS, DataType::Int64, false),
    ]))
}
