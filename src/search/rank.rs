//! Deterministic ranking of scored paths.

use std::cmp::Ordering;

/// A path that survived filtering, with its frecency score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPath {
    pub path: String,
    pub score: f64,
}

impl ScoredPath {
    pub fn new(path: impl Into<String>, score: f64) -> Self {
        Self {
            path: path.into(),
            score,
        }
    }
}

/// Compare two candidates in rank order.
///
/// Higher score first, then case-insensitive path order. Paths that differ only
/// in case fall back to ordinal order so the ordering stays total.
pub fn rank_order(a_path: &str, a_score: f64, b_path: &str, b_score: f64) -> Ordering {
    // Adding +0.0 turns -0.0 into 0.0, so equal scores reach the path tie-break
    (b_score + 0.0)
        .total_cmp(&(a_score + 0.0))
        .then_with(|| cmp_ignore_case(a_path, b_path))
        .then_with(|| a_path.cmp(b_path))
}

/// Lower-case one char at a time.
///
/// Unlike [`str::to_lowercase`] this has no context rules: a capital sigma
/// always folds to `σ`, whether or not it ends a word.
pub(crate) fn fold_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase)
}

/// [`fold_chars`] collected into a string.
pub(crate) fn fold_case(text: &str) -> String {
    fold_chars(text).collect()
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    fold_chars(a).cmp(fold_chars(b))
}

/// Sort candidates into rank order in place.
pub fn rank(candidates: &mut [ScoredPath]) {
    candidates.sort_unstable_by(|a, b| rank_order(&a.path, a.score, &b.path, b.score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn paths(ranked: &[ScoredPath]) -> Vec<&str> {
        ranked.iter().map(|c| c.path.as_str()).collect()
    }

    #[test]
    fn test_higher_score_first() {
        let mut candidates = vec![ScoredPath::new("/a", 1.0), ScoredPath::new("/b", 9.5)];
        rank(&mut candidates);
        check!(paths(&candidates) == ["/b", "/a"]);
    }

    #[test]
    fn test_equal_scores_ordered_case_insensitively() {
        let mut candidates = vec![
            ScoredPath::new("/zeta", 2.0),
            ScoredPath::new("/Beta", 2.0),
            ScoredPath::new("/alpha", 2.0),
        ];
        rank(&mut candidates);
        check!(paths(&candidates) == ["/alpha", "/Beta", "/zeta"]);
    }

    #[test]
    fn test_case_only_difference_is_still_total() {
        let mut first = vec![ScoredPath::new("/a", 1.0), ScoredPath::new("/A", 1.0)];
        let mut second = vec![ScoredPath::new("/A", 1.0), ScoredPath::new("/a", 1.0)];
        rank(&mut first);
        rank(&mut second);
        check!(first == second);
        check!(paths(&first) == ["/A", "/a"]);
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let mut candidates = vec![ScoredPath::new("/b", 0.0), ScoredPath::new("/a", -0.0)];
        rank(&mut candidates);
        check!(paths(&candidates) == ["/a", "/b"]);
    }

    #[test]
    fn test_fold_case_ignores_word_position() {
        check!(fold_case("ΟΔΟΣ") == "οδοσ");
        check!(fold_case("ΑΣΑ") == "ασα");
        check!(fold_case("Proj/BA") == "proj/ba");
    }

    #[test]
    fn test_ranking_is_repeatable() {
        let build = || {
            (0..20)
                .map(|i| ScoredPath::new(format!("/dir{}", 19 - i), f64::from(i % 3)))
                .collect::<Vec<_>>()
        };
        let mut first = build();
        let mut second = build();
        second.reverse();
        rank(&mut first);
        rank(&mut second);
        check!(first == second);
    }
}
