//! Census county population schema definitions

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

/// Summary level code (`"040"` state, `"050"` county)
pub const SUMLEV: &str = "SUMLEV";
pub const STATE: &str = "STATE";
pub const COUNTY: &str = "COUNTY";
pub const STNAME: &str = "STNAME";
pub const CTYNAME: &str = "CTYNAME";
/// Derived join key, `STATE` followed by `COUNTY`
pub const FIPS_CODE: &str = "FIPS_CODE";

pub const STATE_CODE_WIDTH: usize = 2;
pub const COUNTY_CODE_WIDTH: usize = 3;

/// Get the Arrow schema of the cleaned population table
///
/// `population_column` names the estimate column carried over from the
/// source, e.g. `POPESTIMATE2019`.
#[must_use]
pub fn population_schema(population_column: &str) -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(STATE, DataType::Utf8, false),
        Field::new(COUNTY, DataType::Utf8, false),
        Field::new(STNAME, DataType::Utf8, true),
        Field::new(CTYNAME, DataType::Utf8, true),
        Field::new(population_column, DataType::Int64, false),
        Field::new(FIPS_CODE, DataType::Utf8, false),
    ]))
}
