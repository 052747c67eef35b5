//! Loading and concatenation of all raw input files.

use std::path::{Path, PathBuf};

use tracing::info;

use sales_model::{RawTable, SOURCE_FILE_COLUMN};

use crate::csv_table::read_csv_table;
use crate::discovery::list_csv_files;
use crate::error::{IngestError, Result};

/// The combined raw dataset together with the files it was built from.
#[derive(Debug, Clone)]
pub struct RawData {
    pub table: RawTable,
    /// Files actually loaded, in concatenation order.
    pub files: Vec<PathBuf>,
}

/// Loads every CSV file in `dir` into one combined working table.
///
/// Each row is tagged with a `source_file` column carrying the base file
/// name of its origin. Columns are aligned by name across files: a
/// column missing from one file yields empty cells
/// for that file's rows. Fails with [`IngestError::NoInput`] when the
/// directory contains no CSV files.
pub fn load_raw_files(dir: &Path) -> Result<RawData> {
    let files = list_csv_files(dir)?;
    if files.is_empty() {
        return Err(IngestError::NoInput {
            dir: dir.to_path_buf(),
        });
    }

    let mut combined = RawTable::default();
    for path in &files {
        let mut table = read_csv_table(path)?;
        info!(file = %path.display(), rows = table.height(), "read input file");

        let source = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        tag_source_file(&mut table, &source);
        append_by_name(&mut combined, table);
    }

    info!(
        files = files.len(),
        rows = combined.height(),
        columns = combined.columns.len(),
        "combined raw dataset"
    );
    Ok(RawData {
        table: combined,
        files,
    })
}

/// Sets the `source_file` column on every row, overwriting any column of
/// that name already present in the input file.
fn tag_source_file(table: &mut RawTable, source: &str) {
    match table.column_index(SOURCE_FILE_COLUMN) {
        Some(idx) => {
            for row in &mut table.rows {
                row[idx] = source.to_string();
            }
        }
        None => {
            table.columns.push(SOURCE_FILE_COLUMN.to_string());
            for row in &mut table.rows {
                row.push(source.to_string());
            }
        }
    }
}

/// Appends `table`'s rows to `combined`, aligning columns by name.
///
/// Columns keep first-encountered order; columns new to `combined` are
/// appended and back-filled with empty cells for existing rows.
fn append_by_name(combined: &mut RawTable, table: RawTable) {
    for column in &table.columns {
        if combined.column_index(column).is_none() {
            combined.columns.push(column.clone());
            for row in &mut combined.rows {
                row.push(String::new());
            }
        }
    }

    let width = combined.columns.len();
    // Every incoming column exists in `combined` at this point.
    let targets: Vec<usize> = table
        .columns
        .iter()
        .filter_map(|column| combined.column_index(column))
        .collect();

    for row in table.rows {
        let mut aligned = vec![String::new(); width];
        for (cell, &target) in row.into_iter().zip(&targets) {
            aligned[target] = cell;
        }
        combined.rows.push(aligned);
    }
}
