//! IO utilities for persisting tables.

pub mod parquet;

pub use self::parquet::{read_parquet, write_parquet};
