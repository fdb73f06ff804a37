//! The `check` pipeline: discover, read, analyze.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use fieldesc_core::{AnalyzeError, analyze_source};
use fieldesc_ingest::{DiscoveryOptions, expand_patterns, read_source};

use crate::types::{CheckResult, FileFailure, FileReport};

/// Runs the analyzer over every Go file matched by `patterns`.
///
/// Pattern errors abort the run. Files that cannot be read or parsed are
/// recorded as failures and the remaining files are still checked.
pub fn check_patterns<S: AsRef<str>>(
    patterns: &[S],
    options: &DiscoveryOptions,
) -> Result<CheckResult> {
    let span = info_span!("check", patterns = patterns.len());
    let _guard = span.enter();

    let files = expand_patterns(patterns, options).context("expand source patterns")?;
    info!(files = files.len(), "discovered Go sources");

    let mut result = CheckResult::default();
    for path in &files {
        match check_file(path) {
            Ok(report) => result.files.push(report),
            Err(failure) => {
                warn!(path = %failure.path.display(), reason = %failure.reason, "skipping file");
                result.failures.push(failure);
            }
        }
    }

    info!(
        files = result.files.len(),
        diagnostics = result.diagnostic_count(),
        failures = result.failures.len(),
        "check complete"
    );
    Ok(result)
}

fn check_file(path: &Path) -> Result<FileReport, FileFailure> {
    let source = read_source(path).map_err(|error| FileFailure {
        path: path.to_path_buf(),
        reason: format!("failed to read: {error}"),
    })?;
    let diagnostics = analyze_source(&source.path, &source.content).map_err(|error| FileFailure {
        path: path.to_path_buf(),
        reason: failure_reason(&error),
    })?;
    debug!(path = %path.display(), diagnostics = diagnostics.len(), "analyzed file");
    Ok(FileReport {
        path: source.path,
        diagnostics,
    })
}

fn failure_reason(error: &AnalyzeError) -> String {
    match error {
        AnalyzeError::Parse { line, column, .. } => {
            format!("failed to parse: syntax error at {line}:{column}")
        }
        AnalyzeError::Syntax(inner) => format!("failed to parse: {inner}"),
    }
}
