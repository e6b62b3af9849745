//! Publication DOI batch CLI.

use clap::{ColorChoice, Parser};
use pubdoi_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_process, run_verify};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));
    let exit_code = match cli.command {
        Command::Process(args) => match run_process(&args) {
            Ok(result) => {
                print_summary(&result);
                if result.has_failures() { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Verify => match run_verify() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
