//! Columnar Parquet output via polars.

use std::fs::File;
use std::path::Path;

use chrono::Datelike;
use polars::error::PolarsResult;
use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, ParquetWriter, Series};

use sales_model::{ColumnType, Table, Value};

use crate::error::{OutputError, Result};

/// `num_days_from_ce()` of 1970-01-01; polars Date counts days from the
/// Unix epoch.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Writes the table as a Parquet file with real column dtypes: Date for
/// dates, nullable Float64/Int64 for numerics, String for text.
pub fn write_parquet(table: &Table, path: &Path) -> Result<()> {
    let map_msg = |message: String| OutputError::ParquetWrite {
        path: path.to_path_buf(),
        message,
    };

    let mut columns: Vec<Column> = Vec::with_capacity(table.columns.len());
    for (idx, spec) in table.columns.iter().enumerate() {
        let column =
            build_column(table, idx, spec.ty, &spec.name).map_err(|e| map_msg(e.to_string()))?;
        columns.push(column);
    }

    let mut frame = DataFrame::new(columns).map_err(|e| map_msg(e.to_string()))?;
    let file = File::create(path).map_err(|e| map_msg(e.to_string()))?;
    ParquetWriter::new(file)
        .finish(&mut frame)
        .map_err(|e| map_msg(e.to_string()))?;
    Ok(())
}

fn build_column(table: &Table, idx: usize, ty: ColumnType, name: &str) -> PolarsResult<Column> {
    match ty {
        ColumnType::Text => {
            let values: Vec<Option<String>> = table
                .rows
                .iter()
                .map(|row| match &row[idx] {
                    Value::Text(text) => Some(text.clone()),
                    Value::Null => None,
                    other => Some(format!("{other:?}")),
                })
                .collect();
            Ok(Series::new(name.into(), values).into_column())
        }
        ColumnType::Float => {
            let values: Vec<Option<f64>> = table
                .rows
                .iter()
                .map(|row| match &row[idx] {
                    Value::Float(v) => Some(*v),
                    Value::Int(v) => Some(*v as f64),
                    _ => None,
                })
                .collect();
            Ok(Series::new(name.into(), values).into_column())
        }
        ColumnType::Int => {
            let values: Vec<Option<i64>> = table
                .rows
                .iter()
                .map(|row| match &row[idx] {
                    Value::Int(v) => Some(*v),
                    _ => None,
                })
                .collect();
            Ok(Series::new(name.into(), values).into_column())
        }
        ColumnType::Date => {
            let days: Vec<Option<i32>> = table
                .rows
                .iter()
                .map(|row| match &row[idx] {
                    Value::Date(date) => Some(date.num_days_from_ce() - EPOCH_DAYS_FROM_CE),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), days)
                .cast(&DataType::Date)
                .map(IntoColumn::into_column)
        }
    }
}
