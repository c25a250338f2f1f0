//! Parquet file operations
//!
//! Writes a record batch as a ZSTD-compressed Parquet file and reads it back.
//! Column types survive the round trip unchanged: `Utf8` codes keep their
//! leading zeros, `Date32` stays a date and `Int64` stays an integer.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use arrow::compute::concat_batches;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::WriterProperties;

use crate::error::Result;
use crate::error::util::{safe_create_file, safe_open_file};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Sibling path the output is staged at before being renamed into place
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a record batch to a compressed Parquet file
///
/// The file is written to a temporary sibling first and renamed on success,
/// so a failed write never leaves a truncated artifact at `path`.
pub fn write_parquet(batch: &RecordBatch, path: &Path) -> Result<()> {
    let start = Instant::now();
    log_operation_start("Writing parquet file", path);

    let staging = staging_path(path);
    let file = safe_create_file(&staging, "staging parquet output")?;

    let props = WriterProperties::builder()
        .set_compression(Compression::ZSTD(ZstdLevel::default()))
        .build();

    let written = (|| -> Result<()> {
        let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
        writer.write(batch)?;
        writer.close()?;
        Ok(())
    })();

    if let Err(e) = written {
        // Best effort: the staging file is garbage either way.
        let _ = fs::remove_file(&staging);
        return Err(e.context(format!("Failed to write parquet file {}", path.display())));
    }

    fs::rename(&staging, path).with_context(|| {
        format!(
            "Failed to move {} into place at {}",
            staging.display(),
            path.display()
        )
    })?;

    log_operation_complete("wrote", path, batch.num_rows(), Some(start.elapsed()));
    Ok(())
}

/// Read a Parquet file into a single record batch
pub fn read_parquet(path: &Path) -> Result<RecordBatch> {
    let start = Instant::now();
    log_operation_start("Reading parquet file", path);

    let file = safe_open_file(path, "reading parquet table")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| format!("Failed to read parquet file {}", path.display()))?;
    let schema = builder.schema().clone();
    let reader = builder.with_batch_size(DEFAULT_BATCH_SIZE).build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    let batch = concat_batches(&schema, &batches)?;

    log_operation_complete("read", path, batch.num_rows(), Some(start.elapsed()));
    Ok(batch)
}
