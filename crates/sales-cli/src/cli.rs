//! CLI argument definitions for the sales ETL job.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use sales_cli::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "sales-etl",
    version,
    about = "Sales ETL - clean raw sales exports into analytics-ready datasets",
    long_about = "Ingest a directory of raw sales CSV exports, validate and clean them,\n\
                  derive sales KPIs and calendar dimensions, and write the cleaned\n\
                  dataset as CSV and Parquet for downstream analytics tools."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the ETL pipeline over a directory of raw CSV exports.
    Run(RunArgs),

    /// Print the required input columns and the output column list.
    Schema,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory containing the raw sales CSV files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output directory for cleaned datasets (default: <INPUT_DIR>/processed).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Parquet,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl LogFormatArg {
    pub fn log_format(self) -> LogFormat {
        match self {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_log_level_maps_to_the_matching_filter() {
        assert_eq!(LogLevelArg::Error.level_filter(), LevelFilter::ERROR);
        assert_eq!(LogLevelArg::Warn.level_filter(), LevelFilter::WARN);
        assert_eq!(LogLevelArg::Info.level_filter(), LevelFilter::INFO);
        assert_eq!(LogLevelArg::Debug.level_filter(), LevelFilter::DEBUG);
        assert_eq!(LogLevelArg::Trace.level_filter(), LevelFilter::TRACE);
    }
}
