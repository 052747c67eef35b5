//! Integration tests for discovery + loading.

use sales_ingest::{IngestError, load_raw_files};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn loads_and_concatenates_in_sorted_file_order() {
    let dir = TempDir::new().unwrap();
    // Written out of order on purpose; loading must sort by file name.
    write_file(&dir, "b_sales.csv", "order_id,region\nORD-3,South\n");
    write_file(&dir, "a_sales.csv", "order_id,region\nORD-1,West\nORD-2,East\n");

    let data = load_raw_files(dir.path()).unwrap();

    // The reported file list is the one the rows were built from.
    let loaded: Vec<_> = data
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(loaded, vec!["a_sales.csv", "b_sales.csv"]);

    let combined = data.table;
    assert_eq!(combined.columns, vec!["order_id", "region", "source_file"]);
    assert_eq!(combined.height(), 3);
    assert_eq!(combined.rows[0], vec!["ORD-1", "West", "a_sales.csv"]);
    assert_eq!(combined.rows[1], vec!["ORD-2", "East", "a_sales.csv"]);
    assert_eq!(combined.rows[2], vec!["ORD-3", "South", "b_sales.csv"]);
}

#[test]
fn source_file_is_base_name_not_path() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "export.csv", "order_id\nORD-1\n");

    let combined = load_raw_files(dir.path()).unwrap().table;
    let source_idx = combined.column_index("source_file").unwrap();
    assert_eq!(combined.rows[0][source_idx], "export.csv");
}

#[test]
fn zero_csv_files_fails_with_no_input() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "readme.txt", "not a csv");

    let err = load_raw_files(dir.path()).unwrap_err();
    assert!(matches!(err, IngestError::NoInput { .. }));
}

#[test]
fn files_with_differing_columns_align_by_name() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "a.csv", "order_id,quantity\nORD-1,2\n");
    write_file(&dir, "b.csv", "quantity,order_id,profit\n5,ORD-2,1.5\n");

    let combined = load_raw_files(dir.path()).unwrap().table;

    assert_eq!(
        combined.columns,
        vec!["order_id", "quantity", "source_file", "profit"]
    );
    let profit_idx = combined.column_index("profit").unwrap();
    assert_eq!(combined.rows[0][profit_idx], "");
    assert_eq!(combined.rows[1][profit_idx], "1.5");
}
