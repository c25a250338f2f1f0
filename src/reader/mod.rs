//! Module for reading delimited source files into raw Arrow tables.
//!
//! A raw table keeps every source column as nullable `Utf8` under its header
//! name, in source order. Nothing is parsed as a number here, so fixed-width
//! codes such as `"01"` keep their leading zeros. Empty fields become nulls.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use arrow::array::{ArrayRef, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use csv::{ByteRecord, ReaderBuilder};

use crate::error::util::safe_open_file;
use crate::error::{PipelineError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Character encoding of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value
    Latin1,
}

impl SourceEncoding {
    /// Decode one field. `row` is 0 for the header and 1-based for data rows.
    pub fn decode(self, bytes: &[u8], row: usize, column: usize) -> Result<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| PipelineError::Encoding { row, column }.into()),
            Self::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
        }
    }
}

/// Read a headered CSV file from disk into a raw table
pub fn read_csv_path(path: &Path, encoding: SourceEncoding) -> Result<RecordBatch> {
    let start = Instant::now();
    log_operation_start("Reading delimited file", path);

    let file = safe_open_file(path, "reading source table")?;
    let batch = read_csv(file, encoding)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    log_operation_complete("read", path, batch.num_rows(), Some(start.elapsed()));
    Ok(batch)
}

/// Read headered CSV from any reader into a raw table
pub fn read_csv<R: Read>(reader: R, encoding: SourceEncoding) -> Result<RecordBatch> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let names = rdr
        .byte_headers()?
        .iter()
        .enumerate()
        .map(|(col, name)| encoding.decode(name, 0, col))
        .collect::<Result<Vec<_>>>()?;

    let mut builders: Vec<StringBuilder> = names.iter().map(|_| StringBuilder::new()).collect();
    let mut record = ByteRecord::new();
    let mut rows = 0usize;

    while rdr.read_byte_record(&mut record)? {
        rows += 1;
        for (col, (builder, field)) in builders.iter_mut().zip(record.iter()).enumerate() {
            if field.is_empty() {
                builder.append_null();
            } else {
                builder.append_value(encoding.decode(field, rows, col)?);
            }
        }
    }

    let schema = Arc::new(Schema::new(
        names
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, true))
            .collect::<Vec<_>>(),
    ));
    let columns: Vec<ArrayRef> = builders
        .iter_mut()
        .map(|b| Arc::new(b.finish()) as ArrayRef)
        .collect();

    let options = RecordBatchOptions::new().with_row_count(Some(rows));
    Ok(RecordBatch::try_new_with_options(schema, columns, &options)?)
}
