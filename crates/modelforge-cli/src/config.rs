use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use modelforge_core::FilterConfig;

/// Errors loading the optional TOML configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional file-based configuration mirroring the generate flags.
///
/// Command-line values take precedence; the file supplies defaults for
/// anything the invocation leaves unset.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub all: Option<bool>,
    #[serde(default)]
    pub includes: Option<Vec<String>>,
    #[serde(default)]
    pub excludes: Option<Vec<String>>,
    #[serde(default)]
    pub follow_references: Option<bool>,
    #[serde(default)]
    pub module_name: Option<String>,
    #[serde(default)]
    pub out: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Command-line selection values, prior to merging with the file config.
#[derive(Debug, Default, Clone)]
pub struct SelectionArgs {
    pub all: bool,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub no_follow_references: bool,
}

/// Merge command-line values over file values into selection intent.
pub fn resolve_selection(args: &SelectionArgs, file: &FileConfig) -> FilterConfig {
    let includes: BTreeSet<String> = if args.includes.is_empty() {
        file.includes.clone().unwrap_or_default().into_iter().collect()
    } else {
        args.includes.iter().cloned().collect()
    };

    let excludes: BTreeSet<String> = if args.excludes.is_empty() {
        file.excludes.clone().unwrap_or_default().into_iter().collect()
    } else {
        args.excludes.iter().cloned().collect()
    };

    let follow_references = if args.no_follow_references {
        false
    } else {
        file.follow_references.unwrap_or(true)
    };

    FilterConfig {
        all: args.all || file.all.unwrap_or(false),
        includes,
        excludes,
        follow_references,
    }
}
