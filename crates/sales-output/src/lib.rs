//! Cleaned dataset persistence.
//!
//! Two interchangeable formats with the same logical content: a
//! row-oriented CSV (primary, write failure is fatal) and a columnar
//! Parquet file (secondary, write failure degrades to a warning).

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use sales_model::Table;

mod csv;
mod error;
mod parquet;

pub use crate::csv::write_csv;
pub use crate::error::{OutputError, Result};
pub use crate::parquet::write_parquet;

/// Output file name for the primary (CSV) format.
pub const CSV_FILE_NAME: &str = "sales_clean.csv";
/// Output file name for the secondary (Parquet) format.
pub const PARQUET_FILE_NAME: &str = "sales_clean.parquet";

/// Which output formats to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Csv,
    Parquet,
    #[default]
    Both,
}

impl OutputFormat {
    fn wants_csv(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }

    fn wants_parquet(self) -> bool {
        matches!(self, OutputFormat::Parquet | OutputFormat::Both)
    }
}

/// Paths actually written by [`write_outputs`].
#[derive(Debug, Clone, Default)]
pub struct WrittenOutputs {
    pub csv: Option<PathBuf>,
    pub parquet: Option<PathBuf>,
}

/// Persists the cleaned dataset into `out_dir`.
///
/// Creates the directory if needed. A CSV write failure is returned as an
/// error; a Parquet write failure is logged as a warning and the run
/// continues with the CSV output standing.
pub fn write_outputs(table: &Table, out_dir: &Path, format: OutputFormat) -> Result<WrittenOutputs> {
    std::fs::create_dir_all(out_dir).map_err(|source| OutputError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = WrittenOutputs::default();

    if format.wants_csv() {
        let path = out_dir.join(CSV_FILE_NAME);
        write_csv(table, &path)?;
        info!(path = %path.display(), rows = table.height(), "wrote CSV output");
        written.csv = Some(path);
    }

    if format.wants_parquet() {
        let path = out_dir.join(PARQUET_FILE_NAME);
        match write_parquet(table, &path) {
            Ok(()) => {
                info!(path = %path.display(), rows = table.height(), "wrote Parquet output");
                written.parquet = Some(path);
            }
            Err(error) => {
                warn!(%error, "could not write Parquet output; continuing");
            }
        }
    }

    Ok(written)
}
