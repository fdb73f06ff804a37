//! Pattern expansion and Go file discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::{IngestError, Result};

/// Suffix that turns a directory pattern into a recursive one.
const RECURSIVE_SUFFIX: &str = "...";

/// Directory names the Go tool never descends into.
const IGNORED_DIRS: &[&str] = &["vendor", "testdata"];

/// Options controlling which files a pattern expands to.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Include `_test.go` files found in directories.
    pub include_tests: bool,
    /// Extra directory names skipped by recursive patterns.
    pub exclude_dirs: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            include_tests: true,
            exclude_dirs: Vec::new(),
        }
    }
}

/// A parsed command-line pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePattern {
    /// A single file or the Go files directly inside a directory.
    Path(PathBuf),
    /// A directory and all of its subdirectories (`dir/...`).
    Recursive(PathBuf),
}

impl SourcePattern {
    pub fn parse(pattern: &str) -> Self {
        let Some(prefix) = pattern.strip_suffix(RECURSIVE_SUFFIX) else {
            return Self::Path(PathBuf::from(pattern));
        };
        let root = prefix.trim_end_matches(['/', '\\']);
        if root.is_empty() {
            Self::Recursive(PathBuf::from("."))
        } else {
            Self::Recursive(PathBuf::from(root))
        }
    }
}

/// Expands patterns into a sorted, deduplicated list of Go files.
///
/// Files named explicitly are taken as they are; directories contribute
/// their `.go` files, filtered by `options`.
pub fn expand_patterns<S: AsRef<str>>(
    patterns: &[S],
    options: &DiscoveryOptions,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let pattern: &str = pattern.as_ref();
        let before = files.len();
        match SourcePattern::parse(pattern) {
            SourcePattern::Path(path) => expand_path(&path, options, &mut files)?,
            SourcePattern::Recursive(root) => {
                if !root.is_dir() {
                    return Err(IngestError::PathNotFound { path: root });
                }
                walk_dir(&root, options, &mut files)?;
            }
        }
        debug!(pattern, files = files.len() - before, "expanded pattern");
    }

    files.sort();
    files.dedup();

    if files.is_empty() {
        return Err(IngestError::NoSources {
            patterns: patterns
                .iter()
                .map(AsRef::<str>::as_ref)
                .collect::<Vec<_>>()
                .join(" "),
        });
    }
    Ok(files)
}

fn expand_path(path: &Path, options: &DiscoveryOptions, files: &mut Vec<PathBuf>) -> Result<()> {
    if path.is_file() {
        if !has_go_extension(path) {
            return Err(IngestError::NotGoFile {
                path: path.to_path_buf(),
            });
        }
        files.push(path.to_path_buf());
        return Ok(());
    }
    if path.is_dir() {
        files.extend(list_go_files(path, options)?);
        return Ok(());
    }
    Err(IngestError::PathNotFound {
        path: path.to_path_buf(),
    })
}

fn walk_dir(root: &Path, options: &DiscoveryOptions, files: &mut Vec<PathBuf>) -> Result<()> {
    // Symlinked directories are not followed.
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let skipped = entry.depth() > 0
                && entry.file_type().is_dir()
                && is_skipped_dir(entry.path(), options);
            if skipped {
                trace!(dir = %entry.path().display(), "skipping directory");
            }
            !skipped
        });

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if is_go_file_entry(&entry, options) {
            files.push(entry.into_path());
        }
    }
    Ok(())
}

/// Lists Go files directly inside `dir`, sorted by file name.
pub fn list_go_files(dir: &Path, options: &DiscoveryOptions) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if is_go_file_entry(&entry, options) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_go_file_entry(entry: &DirEntry, options: &DiscoveryOptions) -> bool {
    !entry.file_type().is_dir() && entry.path().is_file() && is_go_source(entry.path(), options)
}

fn walk_error(root: &Path, error: walkdir::Error) -> IngestError {
    let path = error.path().unwrap_or(root).to_path_buf();
    IngestError::DirectoryRead {
        path,
        source: error.into(),
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
}

fn has_go_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("go")
}

fn is_go_source(path: &Path, options: &DiscoveryOptions) -> bool {
    let name = file_name(path);
    if name.starts_with('.') || name.starts_with('_') {
        return false;
    }
    if !options.include_tests && name.ends_with("_test.go") {
        return false;
    }
    has_go_extension(path)
}

fn is_skipped_dir(path: &Path, options: &DiscoveryOptions) -> bool {
    let name = file_name(path);
    name.starts_with('.')
        || name.starts_with('_')
        || IGNORED_DIRS.contains(&name)
        || options.exclude_dirs.iter().any(|excluded| excluded == name)
}
