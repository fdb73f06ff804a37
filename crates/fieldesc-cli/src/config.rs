//! `fieldesc.toml` configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use fieldesc_ingest::DiscoveryOptions;

use crate::report::OutputFormat;

/// File looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "fieldesc.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("failed to resolve working directory: {0}")]
    WorkingDir(#[source] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Check `_test.go` files found in directories.
    pub include_tests: bool,
    /// Directory names skipped while walking.
    pub exclude_dirs: Vec<String>,
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_tests: true,
            exclude_dirs: Vec::new(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            include_tests: self.include_tests,
            exclude_dirs: self.exclude_dirs.clone(),
        }
    }
}

/// Loads `explicit`, or `fieldesc.toml` in the current directory if present.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let working_dir = std::env::current_dir().map_err(ConfigError::WorkingDir)?;
    load_config_in(explicit, &working_dir)
}

/// Like [`load_config`], resolving the implicit file against `working_dir`.
///
/// An explicit path must exist; a missing implicit file yields defaults.
pub fn load_config_in(explicit: Option<&Path>, working_dir: &Path) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = working_dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(Config::default());
            }
            candidate
        }
    };
    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    parse_config(&text).map_err(|source| ConfigError::Parse {
        path,
        source: Box::new(source),
    })
}

fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}
