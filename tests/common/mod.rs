//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `alice_table`: a small home-directory table with distinct scores
//! - `listing_file`: the same table written as a zoxide score listing on disk
//!
//! [`ScoreListing`] writes arbitrary listings into a temp directory for tests
//! that go through the file-backed source.

use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;
use zoxide_predictor::{Matcher, ScoreTable, ScoredPath};

/// Entries shared by the home-directory fixtures.
#[allow(dead_code)] // Used across different integration test crates
pub const ALICE_ENTRIES: &[(&str, f64)] = &[
    ("/home/alice", 40.0),
    ("/home/alice/projects", 2.0),
    ("/home/alice/projects/backend", 12.0),
    ("/home/alice/projects/frontend", 30.5),
    ("/home/alice/work", 9.0),
    ("/home/alice/My Documents", 4.0),
    ("/srv/www", 1.0),
];

/// Build a table from literal entries.
pub fn table(entries: &[(&str, f64)]) -> ScoreTable {
    entries
        .iter()
        .map(|(path, score)| ((*path).to_string(), *score))
        .collect()
}

/// Run the matcher to completion and return ranked paths.
#[allow(dead_code)] // Used across different integration test crates
pub fn matched_paths(matcher: &Matcher, table: &ScoreTable, query: &str) -> Vec<String> {
    matcher
        .candidates(table, query, &CancellationToken::new())
        .expect("match was not cancelled")
        .into_iter()
        .map(|ScoredPath { path, .. }| path)
        .collect()
}

/// A score listing written to a temp directory, removed on drop.
#[allow(dead_code)] // Used across different integration test crates
pub struct ScoreListing {
    _temp: TempDir,
    path: PathBuf,
}

#[allow(dead_code)] // Used across different integration test crates
impl ScoreListing {
    /// Writes `entries` in `zoxide query --list --score` format.
    ///
    /// # Panics
    /// Panics if the temp file cannot be written.
    pub fn new(entries: &[(&str, f64)]) -> Self {
        let listing: String = entries
            .iter()
            .map(|(path, score)| format!("{score:>6.1} {path}\n"))
            .collect();
        Self::raw(&listing)
    }

    /// Writes `content` verbatim.
    ///
    /// # Panics
    /// Panics if the temp file cannot be written.
    pub fn raw(content: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("scores.txt");
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write '{}': {}", path.display(), e));
        Self { _temp: temp, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[fixture]
pub fn alice_table() -> ScoreTable {
    table(ALICE_ENTRIES)
}

#[fixture]
#[allow(dead_code)] // Used across different integration test crates
pub fn listing_file() -> ScoreListing {
    ScoreListing::new(ALICE_ENTRIES)
}
