use std::io::{self, Write};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::debug;

use fieldesc_cli::check::check_patterns;
use fieldesc_cli::config::load_config;
use fieldesc_cli::report::{OutputFormat, render, render_failures};
use fieldesc_cli::summary::{apply_table_style, summary_table};
use fieldesc_cli::types::CheckResult;
use fieldesc_core::{ANALYZER_NAME, DESCRIPTION, USAGE};

use crate::cli::{CheckArgs, OutputFormatArg};

pub fn run_doc() -> Result<()> {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec!["Analyzer", ANALYZER_NAME]);
    table.add_row(vec!["Description", DESCRIPTION]);
    table.add_row(vec!["Usage", USAGE]);
    println!("{table}");
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let config = load_config(args.config.as_deref()).context("load configuration")?;
    debug!(?config, "loaded configuration");

    let mut options = config.discovery_options();
    if args.no_tests {
        options.include_tests = false;
    }
    let format = match args.format {
        Some(OutputFormatArg::Text) => OutputFormat::Text,
        Some(OutputFormatArg::Json) => OutputFormat::Json,
        None => config.format,
    };

    let result = check_patterns(&args.patterns, &options)?;

    let rendered = render(&result, format).context("render diagnostics")?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("write diagnostics")?;
    stdout.flush().context("flush diagnostics")?;

    eprint!("{}", render_failures(&result));
    if format == OutputFormat::Text
        && !args.no_summary
        && let Some(table) = summary_table(&result)
    {
        eprintln!("{table}");
    }
    Ok(result)
}
