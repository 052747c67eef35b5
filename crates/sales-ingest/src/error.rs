//! Error types for raw data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering and loading raw sales files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input directory yielded zero CSV files. Fatal: the pipeline
    /// never runs on an empty dataset.
    #[error("no CSV files found in {dir}; put the raw sales exports there")]
    NoInput { dir: PathBuf },

    /// Failed to read or parse a CSV file.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
