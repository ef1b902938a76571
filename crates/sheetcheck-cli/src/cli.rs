//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sheetcheck",
    version,
    about = "Validate spreadsheet exports against per-column rules",
    long_about = "Validate CSV exports of spreadsheets against a per-column rule set.\n\n\
                  Rules cover presence, patterns, lengths, numbers and product\n\
                  identifiers (EAN/GTIN, UPC, ISBN, ASIN)."
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

    /// Allow cell values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a CSV sheet against a rule file.
    Check(CheckArgs),

    /// Report which identifier schemes accept each code.
    Identify(IdentifyArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// CSV export of the sheet; the first non-blank row holds the headers.
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,

    /// Rule file (.json or .csv) with columnName, ruleType, ruleValue, errorMessage.
    #[arg(long = "rules", short = 'r', value_name = "RULES")]
    pub rules: PathBuf,

    /// Write the full report as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Maximum number of failing cells listed in the issue table.
    #[arg(long = "max-issues", value_name = "N", default_value_t = 50)]
    pub max_issues: usize,
}

#[derive(Parser)]
pub struct IdentifyArgs {
    /// Codes to classify.
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,
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
