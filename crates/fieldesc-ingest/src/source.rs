//! Source file loading.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// A Go source file read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

/// Reads `path` as UTF-8 text.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        content,
    })
}
