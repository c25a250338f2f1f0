//! Configuration for the enrichment pipeline.

use std::path::PathBuf;

use crate::reader::SourceEncoding;

/// Census summary level code for county rows
pub const COUNTY_LEVEL: &str = "050";

/// Population estimate column for the 2019 vintage
pub const POPULATION_COLUMN: &str = "POPESTIMATE2019";

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Census county population estimates
    pub population_path: PathBuf,
    /// NYT per-county cumulative case/death counts
    pub cases_path: PathBuf,
    /// Destination of the enriched Parquet table
    pub output_path: PathBuf,
    /// `SUMLEV` value identifying county-level rows
    pub county_level: String,
    /// Name of the population estimate column to carry into the output
    pub population_column: String,
    /// Character encoding of the population source
    pub population_encoding: SourceEncoding,
    /// Character encoding of the case/death source
    pub cases_encoding: SourceEncoding,
    /// Date formats tried in order when parsing the `date` column
    pub date_formats: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            population_path: PathBuf::from("data/co-est2019-alldata.csv"),
            cases_path: PathBuf::from("data/us-counties.csv"),
            output_path: PathBuf::from("data/nyt_enriched.parquet"),
            county_level: COUNTY_LEVEL.to_string(),
            population_column: POPULATION_COLUMN.to_string(),
            population_encoding: SourceEncoding::Latin1,
            cases_encoding: SourceEncoding::Utf8,
            date_formats: vec![
                "%Y-%m-%d".to_string(),
                "%Y/%m/%d".to_string(),
                "%m/%d/%Y".to_string(),
            ],
        }
    }
}
