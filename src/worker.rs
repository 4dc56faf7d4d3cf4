//! Background refresh of the shared score table.
//!
//! The worker owns its timer: it starts when spawned and stops when its
//! [`RefreshHandle`] is stopped or dropped. Each cycle loads a complete table
//! from the source and swaps it in, so matches never see a partial table.

use crate::table::{ScoreSource, ScoreTable, SharedTable};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Shortest period accepted by the timer.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Periodically reloads a [`SharedTable`] from a [`ScoreSource`].
pub struct RefreshWorker<S> {
    table: Arc<SharedTable>,
    source: S,
    period: Duration,
}

impl<S> std::fmt::Debug for RefreshWorker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshWorker")
            .field("table_len", &self.table.snapshot().len())
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}

impl<S: ScoreSource> RefreshWorker<S> {
    pub fn new(table: Arc<SharedTable>, source: S, period: Duration) -> Self {
        Self {
            table,
            source,
            period: period.max(MIN_INTERVAL),
        }
    }

    /// Load once and swap the result in. Returns the new table size.
    ///
    /// A failing source installs an empty table; matches then simply find nothing.
    pub async fn refresh_once(&self) -> usize {
        let start = std::time::Instant::now();
        let table = match self.source.load().await {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(source = %self.source.describe(), "Score refresh failed: {}", e);
                ScoreTable::default()
            }
        };

        let len = table.len();
        self.table.replace(table);
        tracing::info!(
            entries = len,
            elapsed = ?start.elapsed(),
            "Refreshed score table from {}",
            self.source.describe()
        );
        len
    }

    /// Refresh immediately, then every period, until `shutdown` fires.
    pub async fn run(&self, shutdown: CancellationToken) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // First tick completes immediately
            tokio::select! {
                () = shutdown.cancelled() => break,
                _ = ticker.tick() => {}
            }
            tokio::select! {
                () = shutdown.cancelled() => break,
                _ = self.refresh_once() => {}
            }
        }

        tracing::debug!("Refresh worker stopped");
    }

    /// Run on the current tokio runtime.
    pub fn spawn(self) -> RefreshHandle {
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();
        let task = tokio::spawn(async move { self.run(token).await });

        RefreshHandle {
            shutdown,
            task: Some(task),
        }
    }
}

/// Owns a spawned [`RefreshWorker`]. Dropping the handle stops the worker.
#[derive(Debug)]
pub struct RefreshHandle {
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stop the worker and wait for it to exit.
    pub async fn stop(mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            tracing::error!("Refresh worker ended abnormally: {}", e);
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
