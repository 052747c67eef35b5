//! Row-oriented CSV output.

use std::path::Path;

use sales_model::{Table, Value};

use crate::error::{OutputError, Result};

/// Renders one cell for CSV output. Nulls become empty cells, dates use
/// ISO `YYYY-MM-DD`, floats use the shortest round-trippable form.
fn render(value: &Value) -> String {
    match value {
        Value::Text(text) => text.clone(),
        Value::Float(v) => format!("{v}"),
        Value::Int(v) => v.to_string(),
        Value::Date(date) => date.format("%Y-%m-%d").to_string(),
        Value::Null => String::new(),
    }
}

/// Writes the table as a delimited text file with a header row.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let map_err = |source| OutputError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(map_err)?;
    writer.write_record(table.column_names()).map_err(map_err)?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(render))
            .map_err(map_err)?;
    }
    writer
        .flush()
        .map_err(|source| OutputError::CsvWrite {
            path: path.to_path_buf(),
            source: source.into(),
        })?;
    Ok(())
}
