//! Error types for struct checks and source analysis.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single struct check.
///
/// Missing descriptions are findings, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The struct subtree contains syntax errors or missing tokens.
    #[error("struct at line {line} is incomplete or failed to parse")]
    UpstreamParseFailure { line: usize },
}

/// Errors raised while setting up or running the Go parser.
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// The Go grammar could not be loaded into the parser.
    #[error("failed to load Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// tree-sitter returned no tree (cancelled or no language set).
    #[error("parser produced no syntax tree")]
    NoTree,
}

/// Errors raised while analyzing one source file.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The file contains syntax errors; no struct in it is analyzed.
    #[error("{path}:{line}:{column}: syntax error")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
    },
}

/// Result type for source analysis.
pub type Result<T> = std::result::Result<T, AnalyzeError>;
