//! Command handlers.

use anyhow::Result;

use sales_cli::run::{RunOptions, RunSummary, execute};
use sales_model::{OUTPUT_COLUMNS, REQUIRED_COLUMNS};
use sales_output::OutputFormat;

use crate::cli::{OutputFormatArg, RunArgs};
use crate::summary::{apply_table_style, header_cell};

/// Runs the ETL pipeline with the given arguments.
pub fn run_etl(args: &RunArgs) -> Result<RunSummary> {
    let format = match args.format {
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Parquet => OutputFormat::Parquet,
        OutputFormatArg::Both => OutputFormat::Both,
    };
    execute(&RunOptions {
        input_dir: args.input_dir.clone(),
        output_dir: args.output_dir.clone(),
        format,
    })
}

/// Prints the required input columns and the output projection.
pub fn run_schema() {
    let mut table = comfy_table::Table::new();
    table.set_header(vec![header_cell("Required input column")]);
    apply_table_style(&mut table);
    for column in REQUIRED_COLUMNS {
        table.add_row(vec![column]);
    }
    println!("{table}");

    let mut table = comfy_table::Table::new();
    table.set_header(vec![header_cell("Output column")]);
    apply_table_style(&mut table);
    for (column, _ty) in OUTPUT_COLUMNS {
        table.add_row(vec![column]);
    }
    println!("{table}");
}
