//! CLI argument definitions for the field description checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fieldesc",
    version,
    about = "Check that every Go struct field has a description comment",
    long_about = "Check that every named field of every Go struct type is preceded by\n\
                  a comment of the form `// <FieldName> ...`.\n\n\
                  Exits with 3 when fields are missing descriptions and 1 when files\n\
                  cannot be read or parsed."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Check Go files for undocumented struct fields.
    Check(CheckArgs),

    /// Print the analyzer name, description and usage.
    Doc,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Go files, directories, or `dir/...` for a directory tree.
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Output format (default: from config, else text).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Skip `_test.go` files.
    #[arg(long = "no-tests")]
    pub no_tests: bool,

    /// Configuration file (default: ./fieldesc.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not print the per-file summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
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
