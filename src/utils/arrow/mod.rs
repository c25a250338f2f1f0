//! Arrow data handling utilities
//!
//! Helpers for locating columns in record batches, downcasting them to
//! concrete array types and converting between Arrow and chrono dates.

pub mod array_utils;
pub mod conversion;

pub use array_utils::{downcast_array, get_column, int64_column, string_column};
pub use conversion::{date32_to_naive_date, naive_date_to_date32};
