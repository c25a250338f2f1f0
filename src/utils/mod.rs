//! Shared utilities: Arrow column access, date parsing, Parquet I/O and logging.

pub mod arrow;
pub mod dates;
pub mod io;
pub mod logging;

pub use io::parquet::{read_parquet, write_parquet};
