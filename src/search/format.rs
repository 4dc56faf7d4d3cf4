//! Turning ranked paths into suggestion text.

use super::tokenize::PATH_SEPARATORS;
use super::{FormatStyle, TokenizerMode};
use serde::Serialize;

/// A completion offered to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Text the host inserts, e.g. `cd proj backend`
    pub text: String,
    /// The directory the suggestion navigates to
    pub path: String,
}

/// Formats ranked paths for one query.
#[derive(Debug, Clone)]
pub struct SuggestionFormatter<'a> {
    command: &'a str,
    style: FormatStyle,
    tokenizer: TokenizerMode,
    /// Query pieces, computed once for query-preserving output
    query_pieces: Vec<&'a str>,
}

impl<'a> SuggestionFormatter<'a> {
    pub fn new(
        command: &'a str,
        query: &'a str,
        style: FormatStyle,
        tokenizer: TokenizerMode,
    ) -> Self {
        let query_pieces = match style {
            FormatStyle::Verbatim => Vec::new(),
            FormatStyle::QueryPreserving => query
                .split(|c: char| PATH_SEPARATORS.contains(&c) || c.is_whitespace())
                .filter(|piece| !piece.is_empty())
                .collect(),
        };

        Self {
            command,
            style,
            tokenizer,
            query_pieces,
        }
    }

    pub fn format(&self, path: &str) -> Suggestion {
        let argument = match self.style {
            FormatStyle::Verbatim => path.to_string(),
            FormatStyle::QueryPreserving => self.rewrite_query(path),
        };

        Suggestion {
            text: format!("{} {}", self.command, argument),
            path: path.to_string(),
        }
    }

    /// Swap the query's final piece for the path's final component.
    fn rewrite_query(&self, path: &str) -> String {
        let last_component = path
            .split(|c: char| self.tokenizer.is_separator(c))
            .rfind(|piece| !piece.is_empty());

        match (self.query_pieces.split_last(), last_component) {
            (Some((_, earlier)), Some(component)) => {
                let mut pieces = earlier.to_vec();
                pieces.push(component);
                pieces.join(" ")
            }
            _ => self.query_pieces.join(" "),
        }
    }
}

/// Plain `"{command} {path}"` suggestion, used by the fast paths.
pub fn verbatim(command: &str, path: &str) -> Suggestion {
    Suggestion {
        text: format!("{} {}", command, path),
        path: path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[test]
    fn test_verbatim_prefixes_command() {
        let formatter = SuggestionFormatter::new(
            "cd",
            "proj ba",
            FormatStyle::Verbatim,
            TokenizerMode::SeparatorsOnly,
        );
        let suggestion = formatter.format("/home/u/Projects/backend");
        check!(suggestion.text == "cd /home/u/Projects/backend");
        check!(suggestion.path == "/home/u/Projects/backend");
    }

    #[rstest]
    #[case("proj ba", "/home/u/Projects/backend", "cd proj backend")]
    #[case("PROJ ba", "/home/u/projects/Backend", "cd PROJ Backend")]
    #[case("proj/ba", "/home/u/projects/backend", "cd proj backend")]
    #[case("ba", "C:\\work\\backend", "cd backend")]
    #[case("proj ba", "/", "cd proj ba")]
    fn test_query_preserving(#[case] query: &str, #[case] path: &str, #[case] expected: &str) {
        let formatter = SuggestionFormatter::new(
            "cd",
            query,
            FormatStyle::QueryPreserving,
            TokenizerMode::SeparatorsOnly,
        );
        check!(formatter.format(path).text == expected);
    }

    #[test]
    fn test_query_preserving_keeps_spaced_component_in_separators_only_mode() {
        let formatter = SuggestionFormatter::new(
            "cd",
            "docs",
            FormatStyle::QueryPreserving,
            TokenizerMode::SeparatorsOnly,
        );
        check!(formatter.format("/home/u/My Docs").text == "cd My Docs");

        let formatter = SuggestionFormatter::new(
            "cd",
            "docs",
            FormatStyle::QueryPreserving,
            TokenizerMode::SeparatorsAndSpace,
        );
        check!(formatter.format("/home/u/My Docs").text == "cd Docs");
    }
}
