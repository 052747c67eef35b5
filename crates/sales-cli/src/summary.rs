//! Run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sales_cli::run::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Input files: {}", summary.input_files);
    if let Some(path) = &summary.csv_path {
        println!("CSV: {}", path.display());
    }
    if let Some(path) = &summary.parquet_path {
        println!("Parquet: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let report = &summary.report;
    table.add_row(vec![Cell::new("Input rows"), Cell::new(report.input_rows)]);
    table.add_row(vec![
        Cell::new("Dropped: unparseable date"),
        drop_cell(report.dropped_bad_date),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: non-numeric field"),
        drop_cell(report.dropped_bad_numeric),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: out-of-range qty/price"),
        drop_cell(report.dropped_out_of_range),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: duplicate order/product"),
        drop_cell(summary.duplicates_removed),
    ]);
    table.add_row(vec![
        Cell::new("Output rows").add_attribute(Attribute::Bold),
        Cell::new(summary.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!("Completed in {:.2?}", summary.duration);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn drop_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
