//! Raw sales data ingestion.
//!
//! The loader boundary of the pipeline: discovers CSV files in the input
//! directory, reads each into an untyped [`sales_model::RawTable`], tags
//! rows with their originating file, and concatenates everything into one
//! working dataset for the transform core.

mod csv_table;
mod discovery;
mod error;
mod loader;

pub use csv_table::read_csv_table;
pub use discovery::list_csv_files;
pub use error::{IngestError, Result};
pub use loader::{RawData, load_raw_files};
