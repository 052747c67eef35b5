//! Data model definitions shared across the sales ETL pipeline.
//!
//! The pipeline moves through three representations:
//!
//! - [`RawTable`]: untyped string cells straight from the CSV loader
//! - [`CleanRecord`] / [`SalesRecord`]: typed rows that survived cleaning,
//!   with derived KPI and calendar fields on [`SalesRecord`]
//! - [`Table`]: the typed output table handed to the writers

mod record;
mod schema;
mod table;

pub use record::{CleanRecord, SalesRecord};
pub use schema::{ColumnType, OUTPUT_COLUMNS, REQUIRED_COLUMNS, SOURCE_FILE_COLUMN};
pub use table::{ColumnSpec, RawTable, Table, Value};
