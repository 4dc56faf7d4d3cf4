//! The frecency score table and its shared, swappable snapshot.

mod parse;
mod source;

pub use parse::{parse_line, parse_listing};
pub use source::{FileSource, ScoreSource, StaticSource, ZoxideSource};

use ahash::AHashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Immutable mapping from directory path to frecency score.
///
/// Built once from a source listing and never patched afterwards; a refresh
/// produces a whole new table.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    entries: AHashMap<String, f64>,
}

impl ScoreTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<f64> {
        self.entries.get(path).copied()
    }

    /// Iterate entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(path, score)| (path.as_str(), *score))
    }
}

/// Collects entries, keeping the first score seen for a duplicated path.
impl FromIterator<(String, f64)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut entries = AHashMap::new();
        for (path, score) in iter {
            entries.entry(path).or_insert(score);
        }
        Self { entries }
    }
}

/// Double-buffered access to the current table.
///
/// Readers take an `Arc` snapshot and keep it for a whole match; a refresh
/// swaps in a complete new table. Nobody ever observes a half-built table.
#[derive(Debug, Default)]
pub struct SharedTable {
    current: RwLock<Arc<ScoreTable>>,
}

impl SharedTable {
    pub fn new(table: ScoreTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// The table as of now. Later swaps do not affect the returned snapshot.
    pub fn snapshot(&self) -> Arc<ScoreTable> {
        // The lock only guards a pointer, so a poisoned lock still holds a valid table
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Install a new table, returning the previous one.
    pub fn replace(&self, table: ScoreTable) -> Arc<ScoreTable> {
        let table = Arc::new(table);
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, table)
    }
}
