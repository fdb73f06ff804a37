//! Rendering check results for stdout.

use serde::Deserialize;

use fieldesc_core::Diagnostic;

use crate::types::CheckResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `path:line:col: message`, one diagnostic per line.
    #[default]
    Text,
    /// A JSON array of diagnostics.
    Json,
}

/// One line per diagnostic, in file then position order.
pub fn render_text(result: &CheckResult) -> String {
    let mut out = String::new();
    for diagnostic in result.diagnostics() {
        out.push_str(&diagnostic.to_string());
        out.push('\n');
    }
    out
}

/// Pretty-printed JSON array of every diagnostic.
pub fn render_json(result: &CheckResult) -> serde_json::Result<String> {
    let diagnostics: Vec<&Diagnostic> = result.diagnostics().collect();
    serde_json::to_string_pretty(&diagnostics)
}

/// Failure lines, `path: reason`.
pub fn render_failures(result: &CheckResult) -> String {
    let mut out = String::new();
    for failure in &result.failures {
        out.push_str(&failure.to_string());
        out.push('\n');
    }
    out
}

pub fn render(result: &CheckResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result).map(|json| json + "\n"),
    }
}
