//! Error types for source discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while expanding patterns and reading sources.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Pattern Errors ===
    /// Pattern names a path that does not exist.
    #[error("path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// Pattern names a file that is not Go source.
    #[error("not a Go source file: {path}")]
    NotGoFile { path: PathBuf },

    /// Patterns matched no Go files at all.
    #[error("no Go files matched {patterns}")]
    NoSources { patterns: String },

    // === File System Errors ===
    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid UTF-8.
    #[error("file is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
