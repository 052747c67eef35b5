//! Fixed input and output schemas.
//!
//! The required column set is deliberately a constant, not configuration:
//! the pipeline performs no schema inference beyond checking that these
//! twelve columns are present after normalization.

/// Columns every raw input file must expose (after lowercasing/trimming).
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "order_id",
    "order_date",
    "region",
    "country",
    "customer_id",
    "product_id",
    "category",
    "sub_category",
    "quantity",
    "unit_price",
    "discount",
    "profit",
];

/// Provenance column appended by the loader (base file name, not path).
pub const SOURCE_FILE_COLUMN: &str = "source_file";

/// Output column data types, used by the writers to pick CSV rendering
/// and Parquet dtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColumnType {
    Text,
    Float,
    Int,
    Date,
}

/// The final projection: output columns in order, with their types.
pub const OUTPUT_COLUMNS: [(&str, ColumnType); 21] = [
    ("order_id", ColumnType::Text),
    ("order_date", ColumnType::Date),
    ("order_year", ColumnType::Int),
    ("order_quarter", ColumnType::Text),
    ("order_month", ColumnType::Int),
    ("order_month_name", ColumnType::Text),
    ("region", ColumnType::Text),
    ("country", ColumnType::Text),
    ("customer_id", ColumnType::Text),
    ("product_id", ColumnType::Text),
    ("category", ColumnType::Text),
    ("sub_category", ColumnType::Text),
    ("quantity", ColumnType::Float),
    ("unit_price", ColumnType::Float),
    ("discount", ColumnType::Float),
    ("gross_sales", ColumnType::Float),
    ("discount_amount", ColumnType::Float),
    ("net_sales", ColumnType::Float),
    ("profit", ColumnType::Float),
    ("margin_pct", ColumnType::Float),
    ("source_file", ColumnType::Text),
];
