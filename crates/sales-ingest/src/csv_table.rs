//! CSV file reading into the untyped working-table shape.

use std::path::Path;

use csv::ReaderBuilder;

use sales_model::RawTable;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Reads one CSV file into a [`RawTable`].
///
/// The first row is the header. Cells keep their raw text apart from BOM
/// stripping; header names additionally get surrounding/inner whitespace
/// collapsed. Short rows are padded to the header width, all-empty rows
/// are skipped.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let map_err = |source| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(map_err)?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(map_err)?
        .iter()
        .map(normalize_header)
        .collect();

    let mut table = RawTable::new(columns);
    for record in reader.records() {
        let record = record.map_err(map_err)?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(table.columns.len());
        for idx in 0..table.columns.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        table.push_row(row);
    }

    Ok(table)
}
