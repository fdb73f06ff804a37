//! Positioned findings for reporting.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::model::SourcePosition;

/// Outcome of checking one struct type in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructReport {
    /// Name the struct is declared under, if it has one.
    pub identifier: Option<String>,
    /// Position of the `struct` keyword.
    pub position: SourcePosition,
    pub outcome: Result<Vec<String>, CheckError>,
}

impl StructReport {
    pub fn identifier(&self) -> &str {
        self.identifier.as_deref().unwrap_or_default()
    }

    pub fn is_clean(&self) -> bool {
        matches!(&self.outcome, Ok(missing) if missing.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// One or more fields lack a description comment.
    MissingDescription,
    /// The struct could not be checked.
    CheckFailed,
}

/// A reportable finding at a source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    /// 1-based line.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
    pub kind: DiagnosticKind,
    #[serde(rename = "struct")]
    pub struct_name: String,
    /// Fields missing a description, in declaration order.
    pub fields: Vec<String>,
    pub message: String,
}

impl Diagnostic {
    /// Builds the diagnostic for a report; `None` when the struct is clean.
    pub fn from_report(path: &Path, report: &StructReport) -> Option<Self> {
        let identifier = report.identifier();
        let (kind, fields, message) = match &report.outcome {
            Ok(missing) if missing.is_empty() => return None,
            Ok(missing) => (
                DiagnosticKind::MissingDescription,
                missing.clone(),
                format!(
                    "missing field description for fields for struct with identifier {identifier:?}: {}",
                    missing.join(", ")
                ),
            ),
            Err(error) => (
                DiagnosticKind::CheckFailed,
                Vec::new(),
                format!("failed to analyze struct with identifier {identifier:?}: {error}"),
            ),
        };
        Some(Self {
            path: path.to_path_buf(),
            line: report.position.line(),
            column: report.position.display_column(),
            kind,
            struct_name: identifier.to_string(),
            fields,
            message,
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.path.display(),
            self.line,
            self.column,
            self.message
        )
    }
}
