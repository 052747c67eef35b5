//! End-to-end ETL run orchestration.
//!
//! Load → transform → write, with wall-clock timing around the whole job.
//! Fatal errors (no input files, missing schema columns, CSV write
//! failure) abort before any later step runs, so no partial output is
//! left behind by an aborted run.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use tracing::info;

use sales_ingest::load_raw_files;
use sales_output::{OutputFormat, write_outputs};
use sales_transform::CleanReport;

/// Options for one ETL run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input_dir: PathBuf,
    /// Defaults to `<input_dir>/processed` when unset.
    pub output_dir: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Counts and artifacts from a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input_files: usize,
    pub report: CleanReport,
    pub duplicates_removed: usize,
    pub output_rows: usize,
    pub csv_path: Option<PathBuf>,
    pub parquet_path: Option<PathBuf>,
    pub duration: Duration,
}

/// Runs the full ETL job.
pub fn execute(options: &RunOptions) -> Result<RunSummary> {
    let started = Instant::now();
    info!(input = %options.input_dir.display(), "ETL job started");

    let raw = load_raw_files(&options.input_dir).context("load raw sales files")?;
    let input_files = raw.files.len();
    let output = sales_transform::run(raw.table).context("transform raw sales data")?;

    let out_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| options.input_dir.join("processed"));
    let written = write_outputs(&output.table, &out_dir, options.format)
        .with_context(|| format!("write outputs to {}", out_dir.display()))?;

    let duration = started.elapsed();
    info!(elapsed = ?duration, "ETL job finished");

    Ok(RunSummary {
        input_files,
        report: output.report,
        duplicates_removed: output.duplicates_removed,
        output_rows: output.table.height(),
        csv_path: written.csv,
        parquet_path: written.parquet,
        duration,
    })
}
