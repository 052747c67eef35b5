//! Error types for output writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting the cleaned dataset.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create the output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the CSV output. Fatal for the run.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to write the Parquet output. Recovered by the caller: the
    /// CSV output stands and the run continues.
    #[error("failed to write Parquet {path}: {message}")]
    ParquetWrite { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, OutputError>;
