use anyhow::Context;
use fips_enrich::models::records_from_batch;
use fips_enrich::utils::logging::{create_spinner, finish_progress_bar};
use fips_enrich::{PipelineConfig, fips_lookup, read_parquet};
use log::{debug, info};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::default();
    info!(
        "Enriching {} with {}",
        config.cases_path.display(),
        config.population_path.display()
    );

    let spinner = create_spinner("Loading, joining and writing");
    let summary = fips_enrich::run(&config);
    finish_progress_bar(&spinner, Some("done"));
    let summary = summary.context("Enrichment run failed")?;

    // Read the artifact back and spot-check one row through the lookup helper
    let table = read_parquet(&config.output_path)?;
    if table.num_rows() != summary.enriched_rows {
        anyhow::bail!(
            "Output has {} rows, expected {}",
            table.num_rows(),
            summary.enriched_rows
        );
    }
    if let Some(first) = records_from_batch(&table.slice(0, table.num_rows().min(1)))?.first() {
        let row = fips_lookup(&first.geo_code, first.date, &table)?;
        debug!(
            "Lookup {} {}: {}",
            first.geo_code,
            first.date,
            serde_json::to_string(&row)?
        );
    }

    info!(
        "Wrote {} rows to {}",
        summary.enriched_rows,
        config.output_path.display()
    );
    Ok(())
}
