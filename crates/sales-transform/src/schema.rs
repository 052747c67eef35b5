//! Column-name normalization and required-schema validation.

use sales_model::{RawTable, REQUIRED_COLUMNS};

use crate::error::{Result, TransformError};

/// Lowercases and trims every column name, then verifies the required
/// schema.
///
/// Fails with [`TransformError::MissingColumns`] listing EVERY missing
/// required column (not just the first) alongside the columns actually
/// present. Consumes the table and returns the normalized one; the
/// caller's dataset is never mutated in place across a failure.
pub fn normalize_schema(mut table: RawTable) -> Result<RawTable> {
    for column in &mut table.columns {
        *column = column.trim().to_lowercase();
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| table.column_index(required).is_none())
        .map(|required| (*required).to_string())
        .collect();

    if !missing.is_empty() {
        return Err(TransformError::MissingColumns {
            missing,
            present: table.columns.clone(),
        });
    }

    Ok(table)
}
