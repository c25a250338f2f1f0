//! Arrow schemas and column names for the three cleaned tables.

pub mod cases;
pub mod enriched;
pub mod population;

pub use cases::cases_schema;
pub use enriched::{OUTPUT_COLUMNS, enriched_schema, output_column_map};
pub use population::population_schema;
