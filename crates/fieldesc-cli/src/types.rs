use std::fmt;
use std::path::PathBuf;

use fieldesc_core::Diagnostic;

/// Exit code for a run without findings.
pub const EXIT_CLEAN: i32 = 0;
/// Exit code when any file could not be read or parsed.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when diagnostics were reported.
pub const EXIT_DIAGNOSTICS: i32 = 3;

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    /// Every analyzed file, in discovery order, including clean ones.
    pub files: Vec<FileReport>,
    /// Files skipped because they could not be read or parsed.
    pub failures: Vec<FileFailure>,
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

impl CheckResult {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.files.iter().flat_map(|file| file.diagnostics.iter())
    }

    pub fn diagnostic_count(&self) -> usize {
        self.files.iter().map(|file| file.diagnostics.len()).sum()
    }

    pub fn missing_field_count(&self) -> usize {
        self.diagnostics().map(|diagnostic| diagnostic.fields.len()).sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Failures outrank findings.
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() {
            EXIT_FAILURE
        } else if self.diagnostic_count() > 0 {
            EXIT_DIAGNOSTICS
        } else {
            EXIT_CLEAN
        }
    }
}
