//! Ordered-term path filtering.
//!
//! A candidate path passes when every query term can be found in it, in query
//! order, without backtracking, and its final component satisfies the
//! last-keyword rule for the configured [`LastComponentMode`].

use super::rank::{fold_case, fold_chars};
use super::tokenize::{Term, last_keyword};
use super::{LastComponentMode, TokenizerMode};

/// The canonical separator every recognized separator is folded into.
const NORMALIZED_SEPARATOR: char = '/';

/// A tokenized query prepared for testing many paths.
#[derive(Debug, Clone)]
pub struct PathFilter {
    /// Terms with literals already lower-cased
    terms: Vec<Term>,
    /// Lower-cased last keyword
    keyword: String,
    tokenizer: TokenizerMode,
    last_component: LastComponentMode,
}

impl PathFilter {
    /// Build a filter from tokenized terms.
    ///
    /// Returns `None` for an empty term sequence; an empty query matches nothing.
    pub fn new(
        terms: &[Term],
        tokenizer: TokenizerMode,
        last_component: LastComponentMode,
    ) -> Option<Self> {
        let keyword = fold_case(last_keyword(terms, tokenizer)?);
        let terms = terms
            .iter()
            .map(|term| match term {
                Term::Literal(text) => Term::Literal(fold_case(text)),
                Term::Separator(c) => Term::Separator(*c),
            })
            .collect();

        Some(Self {
            terms,
            keyword,
            tokenizer,
            last_component,
        })
    }

    /// Check one candidate path.
    pub fn matches(&self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }

        let normalized = self.normalize(path);
        self.terms_in_order(&normalized) && self.last_component_matches(&normalized)
    }

    /// Lower-case the path and fold every recognized separator into `/`.
    fn normalize(&self, path: &str) -> String {
        fold_chars(path)
            .map(|c| {
                if self.tokenizer.is_separator(c) {
                    NORMALIZED_SEPARATOR
                } else {
                    c
                }
            })
            .collect()
    }

    fn terms_in_order(&self, normalized: &str) -> bool {
        let mut cursor = 0;
        for term in &self.terms {
            let haystack = &normalized[cursor..];
            cursor += match term {
                Term::Separator(_) => match haystack.find(NORMALIZED_SEPARATOR) {
                    Some(pos) => pos + NORMALIZED_SEPARATOR.len_utf8(),
                    None => return false,
                },
                Term::Literal(text) => match haystack.find(text.as_str()) {
                    Some(pos) => pos + text.len(),
                    None => return false,
                },
            };
        }
        true
    }

    fn last_component_matches(&self, normalized: &str) -> bool {
        let Some(last) = normalized
            .split(NORMALIZED_SEPARATOR)
            .rfind(|component| !component.is_empty())
        else {
            return false;
        };

        match self.last_component {
            LastComponentMode::Exact => last == self.keyword,
            LastComponentMode::Partial => last.contains(self.keyword.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tokenize::tokenize;
    use assert2::check;
    use rstest::rstest;

    fn filter(query: &str, tokenizer: TokenizerMode, mode: LastComponentMode) -> PathFilter {
        PathFilter::new(&tokenize(query, tokenizer), tokenizer, mode).unwrap()
    }

    #[test]
    fn test_empty_query_builds_no_filter() {
        let terms = tokenize("  ", TokenizerMode::SeparatorsOnly);
        check!(
            PathFilter::new(&terms, TokenizerMode::SeparatorsOnly, LastComponentMode::Partial)
                .is_none()
        );
    }

    #[rstest]
    #[case("bar foo", "bar/foo", true)]
    #[case("foo bar", "bar/foo", false)]
    #[case("foo", "a/b/foo", true)]
    #[case("foo", "a/b/foobar", false)]
    #[case("FOO", "a/b/foo", true)]
    #[case("foo", "A/B/Foo", true)]
    #[case("b/foo", "a/b/foo", true)]
    #[case("b\\foo", "a/b/foo", true)]
    #[case("b/foo", "C:\\a\\b\\foo", true)]
    #[case("a/foo", "a/b/foo", true)]
    #[case("foo/", "a/foo", false)]
    #[case("foo", "/", false)]
    #[case("foo", "foo/", true)]
    fn test_exact_mode(#[case] query: &str, #[case] path: &str, #[case] expected: bool) {
        let f = filter(query, TokenizerMode::SeparatorsOnly, LastComponentMode::Exact);
        check!(f.matches(path) == expected, "query={query:?} path={path:?}");
    }

    #[rstest]
    #[case("foo", "a/b/foobar", true)]
    #[case("bar", "a/b/foobar", true)]
    #[case("a bar", "a/b/foobar", true)]
    #[case("b foo", "a/b/foobar", true)]
    #[case("foobar baz", "a/b/foobar", false)]
    #[case("proj ba", "/home/u/projects/backend", true)]
    #[case("proj ba", "/home/u/backend/projects", false)]
    fn test_partial_mode(#[case] query: &str, #[case] path: &str, #[case] expected: bool) {
        let f = filter(query, TokenizerMode::SeparatorsOnly, LastComponentMode::Partial);
        check!(f.matches(path) == expected, "query={query:?} path={path:?}");
    }

    #[test]
    fn test_terms_consume_path_without_backtracking() {
        // The literal "o" after "fo" must be found past the first "fo" match
        let f = filter("fo o", TokenizerMode::SeparatorsOnly, LastComponentMode::Partial);
        check!(f.matches("x/foo"));
        check!(!f.matches("x/fo"));
    }

    #[test]
    fn test_separator_term_requires_separator_after_cursor() {
        let f = filter("foo/bar", TokenizerMode::SeparatorsOnly, LastComponentMode::Partial);
        check!(f.matches("/foo/bar"));
        check!(!f.matches("/bar/foobar"));
    }

    #[rstest]
    #[case("my docs", "/home/u/My Docs", true)]
    #[case("docs", "/home/u/My Docs", true)]
    #[case("my docs", "/home/u/mydocs", false)]
    fn test_space_as_separator(#[case] query: &str, #[case] path: &str, #[case] expected: bool) {
        let f = filter(query, TokenizerMode::SeparatorsAndSpace, LastComponentMode::Partial);
        check!(f.matches(path) == expected, "query={query:?} path={path:?}");
    }

    #[test]
    fn test_space_is_plain_text_in_separators_only_mode() {
        let f = filter("docs", TokenizerMode::SeparatorsOnly, LastComponentMode::Exact);
        check!(!f.matches("/home/u/My Docs"));
        let f = filter("my docs", TokenizerMode::SeparatorsOnly, LastComponentMode::Partial);
        check!(f.matches("/home/u/My Docs"));
        let f = filter("u/docs", TokenizerMode::SeparatorsOnly, LastComponentMode::Partial);
        check!(f.matches("/home/u/My Docs"));
    }

    #[rstest]
    #[case("ΑΣ", "/x/ΑΣΑ", LastComponentMode::Partial)]
    #[case("ΟΔΟΣ", "/x/ΟΔΟΣ", LastComponentMode::Exact)]
    #[case("οδοσ", "/x/ΟΔΟΣ", LastComponentMode::Exact)]
    #[case("x/οδοσ", "/X/ΟΔΟΣ", LastComponentMode::Exact)]
    fn test_sigma_folds_the_same_anywhere(
        #[case] query: &str,
        #[case] path: &str,
        #[case] mode: LastComponentMode,
    ) {
        let f = filter(query, TokenizerMode::SeparatorsOnly, mode);
        check!(f.matches(path), "query={query:?} path={path:?}");
    }

    #[test]
    fn test_empty_path_rejected() {
        let f = filter("a", TokenizerMode::SeparatorsOnly, LastComponentMode::Partial);
        check!(!f.matches(""));
    }
}
