//! CLI argument definitions for the publication DOI batch tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pubdoi",
    version,
    about = "Publication DOI batch tool - upload files and register DOIs",
    long_about = "Read a publications metadata CSV, upload the referenced files to \
                  object storage, register a DOI for each publication, and write \
                  the resulting URLs and DOIs back into the CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a metadata CSV: upload files, register DOIs, write back.
    Process(ProcessArgs),

    /// Check registry credentials and report the repository's DOI prefix.
    Verify,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the publications metadata CSV.
    #[arg(value_name = "CSV_FILE")]
    pub csv_path: PathBuf,

    /// Directory holding the files named in the file_name column.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Validate and report without uploading, registering, or writing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
