//! Fatal configuration errors.
//!
//! Anything in here aborts the running command. Per-locale problems that a
//! command can recover from are modeled as values in `core` instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::CONFIG_FILE_NAME;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} not found in {}. Please run the setup command first.", CONFIG_FILE_NAME, .dir.display())]
    NotFound { dir: PathBuf },

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Please specify 'targetFolder' in {}, or run the setup command first.", CONFIG_FILE_NAME)]
    TargetUnset,

    #[error("Target folder '{}' does not exist.", .path.display())]
    TargetMissing { path: PathBuf },

    #[error("No locale folders found in '{}'.", .root.display())]
    NoLocales { root: PathBuf },

    #[error("No common.json file found in '{locale}' folder ({}).", .path.display())]
    MissingDocument { locale: String, path: PathBuf },

    #[error("Invalid locale document {}: {reason}", .path.display())]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("Locale '{locale}' is not a folder under '{}'.", .root.display())]
    UnknownLocale { locale: String, root: PathBuf },

    #[error("Invalid glob pattern in 'ignores': \"{pattern}\"")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
