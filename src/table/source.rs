//! Collaborators that produce a fresh [`ScoreTable`].

use super::{ScoreTable, parse_listing};
use crate::error::SourceError;
use std::future::Future;
use std::path::PathBuf;

/// Arguments that make zoxide print every tracked directory with its score.
const ZOXIDE_LIST_ARGS: [&str; 4] = ["query", "--list", "--all", "--score"];

/// Something that can produce a complete score table on demand.
pub trait ScoreSource: Send + Sync + 'static {
    /// Short description for logs.
    fn describe(&self) -> String;

    /// Produce a complete table. Partial tables are never returned.
    fn load(&self) -> impl Future<Output = Result<ScoreTable, SourceError>> + Send;
}

/// Reads scores from the `zoxide` binary.
#[derive(Debug, Clone)]
pub struct ZoxideSource {
    program: String,
}

impl ZoxideSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ZoxideSource {
    fn default() -> Self {
        Self::new("zoxide")
    }
}

impl ScoreSource for ZoxideSource {
    fn describe(&self) -> String {
        format!("{} {}", self.program, ZOXIDE_LIST_ARGS.join(" "))
    }

    async fn load(&self) -> Result<ScoreTable, SourceError> {
        let output = tokio::process::Command::new(&self.program)
            .args(ZOXIDE_LIST_ARGS)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| SourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::Exit {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(parse_listing(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Reads a saved listing from disk, e.g. `zoxide query -ls > scores.txt`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<ScoreTable, SourceError> {
        let listing =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| SourceError::Read {
                    origin: self.path.display().to_string(),
                    source,
                })?;
        Ok(parse_listing(&listing))
    }
}

/// Always returns the same table.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    table: ScoreTable,
}

impl StaticSource {
    pub fn new(table: ScoreTable) -> Self {
        Self { table }
    }
}

impl ScoreSource for StaticSource {
    fn describe(&self) -> String {
        format!("static table ({} entries)", self.table.len())
    }

    async fn load(&self) -> Result<ScoreTable, SourceError> {
        Ok(self.table.clone())
    }
}
