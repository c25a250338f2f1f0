//! Joins US county population estimates with daily COVID-19 case and death
//! counts by FIPS code, derives daily counts from the cumulative series, and
//! persists the enriched table as Parquet.

pub mod config;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod schema;
pub mod transform;
pub mod utils;

// Re-export the most common types for easier use
pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use lookup::{FieldValue, fips_lookup};
pub use models::EnrichedRecord;
pub use pipeline::{PipelineSummary, run};
pub use reader::SourceEncoding;

// Arrow types
pub use arrow::record_batch::RecordBatch;

pub use loader::{derive_daily, load_cases, load_population, mark_boundaries};
pub use transform::{cleanup_output, enrich};
pub use utils::{read_parquet, write_parquet};
