//! Typed rows of the enriched table
//!
//! Conversion between `EnrichedRecord` values and Arrow record batches goes
//! through `serde_arrow`, using the fixed enriched schema.

use arrow::datatypes::FieldRef;
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::enriched_schema;

/// One county-day of the enriched output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub geo_code: String,
    pub date: NaiveDate,
    pub daily_cases: i64,
    pub cumulative_cases: i64,
    pub daily_deaths: i64,
    pub cumulative_deaths: i64,
    pub population_estimate: i64,
}

fn enriched_fields() -> Vec<FieldRef> {
    enriched_schema().fields().iter().cloned().collect()
}

/// Deserialize every row of an enriched table
pub fn records_from_batch(batch: &RecordBatch) -> Result<Vec<EnrichedRecord>> {
    Ok(serde_arrow::from_record_batch(batch)?)
}

/// Build an enriched table from records
pub fn records_to_batch(records: &[EnrichedRecord]) -> Result<RecordBatch> {
    Ok(serde_arrow::to_record_batch(&enriched_fields(), &records)?)
}
