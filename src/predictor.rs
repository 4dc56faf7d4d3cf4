//! The host-facing predictor contract and its zoxide-backed implementation.

use crate::config::Config;
use crate::search::format::verbatim;
use crate::search::{Matcher, Strategy, Suggestion, prefix};
use crate::table::{ScoreSource, SharedTable};
use crate::worker::{RefreshHandle, RefreshWorker};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Feedback signals a host may forward after showing suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    SuggestionDisplayed,
    SuggestionAccepted,
    CommandLineAccepted,
    CommandLineExecuted,
}

/// A command-line predictor as seen by an interactive shell.
///
/// Only [`Predictor::suggest`] is required; feedback hooks default to no-ops.
pub trait Predictor: Send + Sync {
    /// Stable identifier used when registering with the host.
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Suggestions for the full command line typed so far.
    ///
    /// `Some(vec![])` means nothing to suggest; `None` means the request was
    /// cancelled and any result would be stale.
    fn suggest(&self, input: &str, cancel: &CancellationToken) -> Option<Vec<Suggestion>>;

    fn can_accept_feedback(&self, _kind: FeedbackKind) -> bool {
        false
    }

    fn on_suggestion_displayed(&self, _session: u32, _count_or_index: i32) {}

    fn on_suggestion_accepted(&self, _session: u32, _accepted: &str) {}

    fn on_command_line_accepted(&self, _history: &[String]) {}

    fn on_command_line_executed(&self, _command_line: &str, _success: bool) {}
}

/// Registration identifier carried over from the shell module.
pub const PREDICTOR_ID: &str = "ffdc2a29-0644-4342-b776-ceda9a057fcd";

/// Suggests directories for `cd` from a frecency table.
#[derive(Debug)]
pub struct ZoxidePredictor {
    table: Arc<SharedTable>,
    matcher: Matcher,
    strategy: Strategy,
    limit: usize,
    /// Present when this predictor owns the refresh task
    refresh: Option<RefreshHandle>,
}

impl ZoxidePredictor {
    /// Predictor over a table someone else keeps fresh.
    pub fn new(table: Arc<SharedTable>, config: &Config) -> Self {
        Self {
            table,
            matcher: Matcher::new(config.match_options()),
            strategy: config.strategy,
            limit: config.limit,
            refresh: None,
        }
    }

    /// Predictor that owns a refresh worker for `source`.
    ///
    /// The worker is spawned on the current tokio runtime and stops when the
    /// predictor is dropped.
    pub fn with_refresh<S: ScoreSource>(config: &Config, source: S) -> Self {
        let table = Arc::new(SharedTable::default());
        let refresh =
            RefreshWorker::new(table.clone(), source, config.refresh_interval()).spawn();

        Self {
            refresh: Some(refresh),
            ..Self::new(table, config)
        }
    }

    pub fn table(&self) -> &Arc<SharedTable> {
        &self.table
    }

    /// Stop the owned refresh worker, if any, and wait for it.
    pub async fn shutdown(&mut self) {
        if let Some(refresh) = self.refresh.take() {
            refresh.stop().await;
        }
    }

    fn command(&self) -> &str {
        &self.matcher.options().command
    }

    /// Suggestions for the argument of the command, already split off.
    pub fn suggest_argument(
        &self,
        argument: &str,
        cancel: &CancellationToken,
    ) -> Option<Vec<Suggestion>> {
        let argument = argument.trim();
        if argument.is_empty() {
            return Some(Vec::new());
        }

        let table = self.table.snapshot();
        match self.strategy {
            Strategy::Ordered => self.matcher.suggest(&table, argument, cancel),
            Strategy::PrefixContains => {
                let ranked = prefix::prefix_then_contains(&table, argument, self.limit, cancel)?;
                Some(
                    ranked
                        .iter()
                        .map(|candidate| verbatim(self.command(), &candidate.path))
                        .collect(),
                )
            }
        }
    }

    /// The single most frecent directory.
    pub fn suggest_best(&self) -> Option<Suggestion> {
        prefix::best(&self.table.snapshot()).map(|best| verbatim(self.command(), &best.path))
    }

    /// The `limit` most frecent directories.
    pub fn suggest_top(&self) -> Vec<Suggestion> {
        prefix::top(&self.table.snapshot(), self.limit)
            .iter()
            .map(|candidate| verbatim(self.command(), &candidate.path))
            .collect()
    }
}

impl Predictor for ZoxidePredictor {
    fn id(&self) -> &str {
        PREDICTOR_ID
    }

    fn name(&self) -> &str {
        "zoxide"
    }

    fn description(&self) -> &str {
        "Frecency-ranked directory predictor for zoxide"
    }

    fn suggest(&self, input: &str, cancel: &CancellationToken) -> Option<Vec<Suggestion>> {
        let Some(rest) = input.strip_prefix(self.command()) else {
            return Some(Vec::new());
        };

        // Exactly "cd ": offer the single best directory
        if rest == " " {
            return Some(self.suggest_best().into_iter().collect());
        }

        match rest.strip_prefix(' ') {
            Some(argument) => self.suggest_argument(argument, cancel),
            // "cd" alone or a longer command such as "cdx"
            None => Some(Vec::new()),
        }
    }

    fn can_accept_feedback(&self, _kind: FeedbackKind) -> bool {
        true
    }

    fn on_suggestion_displayed(&self, session: u32, count_or_index: i32) {
        tracing::trace!(session, count_or_index, "Suggestion displayed");
    }

    fn on_suggestion_accepted(&self, session: u32, accepted: &str) {
        tracing::debug!(session, accepted, "Suggestion accepted");
    }

    fn on_command_line_accepted(&self, history: &[String]) {
        tracing::trace!(history = history.len(), "Command line accepted");
    }

    fn on_command_line_executed(&self, command_line: &str, success: bool) {
        tracing::trace!(command_line, success, "Command line executed");
    }
}
