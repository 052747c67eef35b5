//! Sales ETL CLI.

use clap::{ColorChoice, Parser};
use sales_cli::logging::{LogConfig, init_logging};
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogLevelArg};
use crate::commands::{run_etl, run_schema};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Run(args) => match run_etl(&args) {
            Ok(summary) => {
                print_summary(&summary);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Schema => {
            run_schema();
            0
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
///
/// An explicit `--log-level` beats `-v`/`-q`, and either one disables
/// the `RUST_LOG` override.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = cli.log_level.map_or_else(
        || cli.verbosity.tracing_level_filter(),
        LogLevelArg::level_filter,
    );
    LogConfig {
        level_filter,
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        format: cli.log_format.log_format(),
        log_file: cli.log_file.clone(),
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        },
        ..LogConfig::default()
    }
}
