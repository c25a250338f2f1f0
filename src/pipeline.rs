//! End-to-end run: load both sources, join, persist.

use std::time::{Duration, Instant};

use arrow::record_batch::RecordBatch;
use log::info;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::loader::{load_cases, load_population};
use crate::transform::enrich;
use crate::utils::io::parquet::write_parquet;

/// Row counts of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub counties: usize,
    pub observations: usize,
    pub enriched_rows: usize,
    pub elapsed: Duration,
}

/// Load and join both sources without writing anything
///
/// The two loaders share nothing and run on separate rayon workers.
pub fn build_enriched(config: &PipelineConfig) -> Result<(RecordBatch, PipelineSummary)> {
    let start = Instant::now();

    let (population, cases) = rayon::join(
        || load_population(&config.population_path, false, config),
        || load_cases(&config.cases_path, false, config),
    );
    let population = population?;
    let cases = cases?;

    let enriched = enrich(&cases, &population, config)?;
    let summary = PipelineSummary {
        counties: population.num_rows(),
        observations: cases.num_rows(),
        enriched_rows: enriched.num_rows(),
        elapsed: start.elapsed(),
    };
    Ok((enriched, summary))
}

/// Run the full pipeline and write the enriched table
///
/// Any failure aborts before the output is written; a previous artifact at
/// the output path is left untouched in that case.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    let start = Instant::now();
    let (enriched, mut summary) = build_enriched(config)?;
    write_parquet(&enriched, &config.output_path)?;
    summary.elapsed = start.elapsed();

    info!(
        "Enriched {} of {} observations across {} counties in {:?}",
        summary.enriched_rows, summary.observations, summary.counties, summary.elapsed
    );
    Ok(summary)
}
