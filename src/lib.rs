//! Frecency-ranked directory suggestions for a partially typed `cd` command.
//!
//! A [`SharedTable`] holds the latest zoxide scores, kept fresh by a
//! [`RefreshWorker`]. [`ZoxidePredictor`] turns a command line into ranked
//! [`Suggestion`]s using the ordered-term [`Matcher`] or the prefix fast path.

pub mod cli;
pub mod config;
pub mod error;
pub mod predictor;
pub mod search;
pub mod table;
pub mod tracing;
pub mod worker;

pub use config::Config;
pub use predictor::{FeedbackKind, Predictor, ZoxidePredictor};
pub use search::{
    FormatStyle, LastComponentMode, MatchOptions, Matcher, ScoredPath, Strategy, Suggestion,
    TokenizerMode,
};
pub use table::{ScoreSource, ScoreTable, SharedTable};
pub use worker::{RefreshHandle, RefreshWorker};
