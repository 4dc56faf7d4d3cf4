//! Query-independent fast paths over the whole table.
//!
//! These do not tokenize: `best` and `top` ignore the query entirely, and
//! `prefix_then_contains` treats the raw input as one plain string.

use super::rank::{ScoredPath, fold_case, rank, rank_order};
use crate::table::ScoreTable;
use tokio_util::sync::CancellationToken;

/// The single highest-ranked entry, or `None` for an empty table.
pub fn best(table: &ScoreTable) -> Option<ScoredPath> {
    table
        .iter()
        .min_by(|(a_path, a_score), (b_path, b_score)| {
            rank_order(a_path, *a_score, b_path, *b_score)
        })
        .map(|(path, score)| ScoredPath::new(path, score))
}

/// The `limit` highest-ranked entries.
pub fn top(table: &ScoreTable, limit: usize) -> Vec<ScoredPath> {
    let entries = table
        .iter()
        .map(|(path, score)| ScoredPath::new(path, score))
        .collect();
    take_ranked(entries, limit)
}

/// Entries whose path starts with `raw`, or failing that contains it.
///
/// Both comparisons ignore case. The contains pass additionally treats `/` and
/// `\` as spaces on both sides, so `"alice proj"` finds `/home/alice/projects`.
/// Returns `None` once `cancel` fires, checked per entry in both passes.
pub fn prefix_then_contains(
    table: &ScoreTable,
    raw: &str,
    limit: usize,
    cancel: &CancellationToken,
) -> Option<Vec<ScoredPath>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(Vec::new());
    }

    let raw_folded = fold_case(raw);
    let prefixed = collect_where(table, cancel, |path| path.starts_with(&raw_folded))?;
    if !prefixed.is_empty() {
        return Some(take_ranked(prefixed, limit));
    }

    let needle = separators_to_spaces(&raw_folded);
    let contained = collect_where(table, cancel, |path| {
        separators_to_spaces(path).contains(&needle)
    })?;
    Some(take_ranked(contained, limit))
}

/// Entries whose case-folded path satisfies `keep`.
fn collect_where(
    table: &ScoreTable,
    cancel: &CancellationToken,
    keep: impl Fn(&str) -> bool,
) -> Option<Vec<ScoredPath>> {
    let mut matches = Vec::new();
    for (path, score) in table.iter() {
        if cancel.is_cancelled() {
            return None;
        }
        if keep(&fold_case(path)) {
            matches.push(ScoredPath::new(path, score));
        }
    }
    Some(matches)
}

fn separators_to_spaces(text: &str) -> String {
    text.replace(['/', '\\'], " ")
}

fn take_ranked(mut ranked: Vec<ScoredPath>, limit: usize) -> Vec<ScoredPath> {
    rank(&mut ranked);
    ranked.truncate(limit);
    ranked
}
