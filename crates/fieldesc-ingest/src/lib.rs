//! Go source discovery for the field description checker.
//!
//! # Features
//!
//! - **Pattern Expansion**: `file.go`, `dir`, `dir/...` and `./...`
//! - **Directory Walking**: skips `vendor`, `testdata`, hidden and `_` directories
//! - **Source Loading**: reads files as UTF-8 text
//!
//! # Example
//!
//! ```
//! use fieldesc_ingest::{DiscoveryOptions, expand_patterns, read_source};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! std::fs::create_dir(dir.path().join("pkg"))?;
//! std::fs::write(dir.path().join("pkg/model.go"), "package pkg\n")?;
//!
//! let pattern = format!("{}/...", dir.path().display());
//! let files = expand_patterns(&[pattern], &DiscoveryOptions::default())?;
//! assert_eq!(files.len(), 1);
//! for path in &files {
//!     let source = read_source(path)?;
//!     assert_eq!(source.content, "package pkg\n");
//! }
//! # Ok(())
//! # }
//! ```

mod discovery;
mod error;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{DiscoveryOptions, SourcePattern, expand_patterns, list_go_files};

// === Source Loading ===
pub use source::{SourceFile, read_source};
