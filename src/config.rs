//! User configuration loaded from TOML.

use crate::error::ConfigError;
use crate::search::{FormatStyle, LastComponentMode, MatchOptions, Strategy, TokenizerMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory name under the platform config dir.
const APP_DIR: &str = "zoxide-predictor";

/// Default number of suggestions for the capped strategies.
pub const DEFAULT_LIMIT: usize = 10;

/// Default score table refresh period.
pub const DEFAULT_REFRESH_SECS: u64 = 120;

/// Predictor settings. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Command whose argument is completed
    pub command: String,
    pub tokenizer: TokenizerMode,
    pub last_component: LastComponentMode,
    pub format: FormatStyle,
    pub strategy: Strategy,
    /// Result cap for `prefix-contains` and `top`
    pub limit: usize,
    pub refresh_interval_secs: u64,
    /// Program used to list scores
    pub zoxide_bin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: "cd".to_string(),
            tokenizer: TokenizerMode::default(),
            last_component: LastComponentMode::default(),
            format: FormatStyle::default(),
            strategy: Strategy::default(),
            limit: DEFAULT_LIMIT,
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
            zoxide_bin: "zoxide".to_string(),
        }
    }
}

impl Config {
    /// `<config dir>/zoxide-predictor/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A missing file at the default location yields the defaults; an explicitly
    /// named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            command: self.command.clone(),
            tokenizer: self.tokenizer,
            last_component: self.last_component,
            format: self.format,
        }
    }

    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
