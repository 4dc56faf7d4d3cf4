//! Error handling types and utilities.

use std::path::PathBuf;
use std::process::ExitStatus;

/// A specialized Result type for zoxide-predictor operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a score source cannot produce a table.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The score-tracking binary could not be started.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The binary ran but exited unsuccessfully.
    #[error("'{program}' exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    /// Reading the score listing failed.
    #[error("failed to read scores from {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },
}

/// Error returned when loading the configuration file fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
