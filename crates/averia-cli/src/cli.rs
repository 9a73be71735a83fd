//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "averia",
    version,
    about = "Executive incident dashboard - KPIs and breakdowns from messy exports",
    long_about = "Derive an executive dashboard from a tabular export of \
                  service-incident records.\n\n\
                  Column headers are matched semantically, so renamed, accented, \
                  or re-spaced headers resolve to the same fields across exports."
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
    /// Compute and render the dashboard for one export.
    Dashboard(DashboardArgs),

    /// Show the detected header mapping and per-column shape hints.
    Columns(ColumnsArgs),

    /// List the semantic fields and their candidate header names.
    Fields,
}

#[derive(Parser)]
pub struct DashboardArgs {
    /// CSV export, or a folder whose first CSV is used.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Keep rows on or after this date (ISO, e.g. 2024-01-01).
    #[arg(long = "from", value_name = "DATE")]
    pub date_from: Option<NaiveDate>,

    /// Keep rows on or before this date (ISO).
    #[arg(long = "to", value_name = "DATE")]
    pub date_to: Option<NaiveDate>,

    /// Keep rows of one district only.
    #[arg(long)]
    pub district: Option<String>,

    /// Keep rows of one product only.
    #[arg(long)]
    pub product: Option<String>,

    /// Keep rows of one technology only.
    #[arg(long)]
    pub technology: Option<String>,

    /// JSON file overriding candidate header names per field.
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Print the payload as JSON instead of tables.
    #[arg(long)]
    pub json: bool,

    /// Write the JSON payload to a file.
    #[arg(long = "json-out", value_name = "PATH")]
    pub json_out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// CSV export, or a folder whose first CSV is used.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON file overriding candidate header names per field.
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,
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

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
