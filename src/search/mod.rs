//! Query matching and ranking over a score table.
//!
//! A query flows through [`tokenize`](tokenize::tokenize) into a
//! [`PathFilter`], surviving paths are ranked by [`rank`](rank::rank), and
//! [`SuggestionFormatter`] renders them. [`prefix`] holds the simpler fast paths
//! that bypass tokenizing altogether.

// Module declarations
pub mod filter;
pub mod format;
pub mod prefix;
pub mod rank;
pub mod tokenize;

pub use filter::PathFilter;
pub use format::{Suggestion, SuggestionFormatter};
pub use rank::ScoredPath;
pub use tokenize::{Term, tokenize};

use crate::table::ScoreTable;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Which characters the tokenizer turns into separator terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerMode {
    /// Only `/` and `\`; whitespace just separates literals.
    #[default]
    SeparatorsOnly,
    /// `/`, `\` and whitespace.
    SeparatorsAndSpace,
}

/// How the final path component is checked against the last keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LastComponentMode {
    /// Component must equal the keyword, ignoring case.
    Exact,
    /// Component must contain the keyword, ignoring case.
    #[default]
    Partial,
}

/// How a ranked path is rendered as suggestion text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FormatStyle {
    /// `cd <full path>`
    Verbatim,
    /// `cd <query with its last piece completed>`
    #[default]
    QueryPreserving,
}

/// Which matcher answers a non-empty query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Ordered-term matching with the last-component rule.
    #[default]
    Ordered,
    /// Plain prefix match, falling back to contains, capped at the limit.
    PrefixContains,
}

/// Everything that shapes one match besides the query and table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    pub command: String,
    pub tokenizer: TokenizerMode,
    pub last_component: LastComponentMode,
    pub format: FormatStyle,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            command: "cd".to_string(),
            tokenizer: TokenizerMode::default(),
            last_component: LastComponentMode::default(),
            format: FormatStyle::default(),
        }
    }
}

/// Runs the ordered-term pipeline against table snapshots.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: MatchOptions,
}

impl Matcher {
    pub const fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Filter and rank the table for `query`.
    ///
    /// Returns `Some(vec![])` when nothing matches (including a blank query) and
    /// `None` only when `cancel` fired before the work finished.
    pub fn candidates(
        &self,
        table: &ScoreTable,
        query: &str,
        cancel: &CancellationToken,
    ) -> Option<Vec<ScoredPath>> {
        let terms = tokenize(query, self.options.tokenizer);
        let Some(filter) =
            PathFilter::new(&terms, self.options.tokenizer, self.options.last_component)
        else {
            return Some(Vec::new());
        };

        let mut matches = Vec::new();
        for (path, score) in table.iter() {
            if cancel.is_cancelled() {
                tracing::debug!(query, "Match cancelled while filtering");
                return None;
            }
            if filter.matches(path) {
                matches.push(ScoredPath::new(path, score));
            }
        }

        if cancel.is_cancelled() {
            return None;
        }
        rank::rank(&mut matches);

        tracing::trace!(
            query,
            terms = terms.len(),
            matched = matches.len(),
            table = table.len(),
            "Matched query"
        );
        Some(matches)
    }

    /// Full pipeline: filter, rank and render suggestions for `query`.
    pub fn suggest(
        &self,
        table: &ScoreTable,
        query: &str,
        cancel: &CancellationToken,
    ) -> Option<Vec<Suggestion>> {
        let ranked = self.candidates(table, query, cancel)?;
        let formatter = SuggestionFormatter::new(
            &self.options.command,
            query,
            self.options.format,
            self.options.tokenizer,
        );
        Some(
            ranked
                .iter()
                .map(|candidate| formatter.format(&candidate.path))
                .collect(),
        )
    }
}
