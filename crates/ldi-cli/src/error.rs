//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The run file could not be read.
    #[error("Cannot read config file {path}: {source}")]
    ReadConfig {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The run file is not valid TOML for a run configuration.
    #[error("Invalid config file {path}: {source}")]
    ParseConfig {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        source: toml::de::Error,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
