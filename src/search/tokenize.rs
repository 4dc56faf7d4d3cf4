//! Query tokenization into ordered literal and separator terms.

use super::TokenizerMode;

/// Path separators recognized in every tokenizer mode.
pub(crate) const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// One unit of a tokenized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A non-empty run of characters to find in the path.
    Literal(String),
    /// A single separator character that must appear in the path.
    Separator(char),
}

impl Term {
    /// The text this term was built from.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Separator('/') => "/",
            Self::Separator('\\') => "\\",
            Self::Separator(_) => " ",
        }
    }
}

impl TokenizerMode {
    /// Whether `c` becomes a separator term in this mode.
    pub(crate) fn is_separator(self, c: char) -> bool {
        PATH_SEPARATORS.contains(&c) || (self == Self::SeparatorsAndSpace && c.is_whitespace())
    }
}

/// Splits a query into its ordered term sequence.
///
/// The query is trimmed first, so blank input yields no terms. Separators never
/// merge with neighbouring literals: `"a/b"` is `[a, /, b]`.
pub fn tokenize(query: &str, mode: TokenizerMode) -> Vec<Term> {
    let mut terms = Vec::new();
    let mut literal_start: Option<usize> = None;

    let query = query.trim();
    for (i, c) in query.char_indices() {
        let separator = mode.is_separator(c);
        if separator || c.is_whitespace() {
            if let Some(start) = literal_start.take() {
                push_literal(&mut terms, &query[start..i]);
            }
            if separator {
                // Whitespace separators are all recorded as a plain space
                let marker = if c.is_whitespace() { ' ' } else { c };
                terms.push(Term::Separator(marker));
            }
        } else if literal_start.is_none() {
            literal_start = Some(i);
        }
    }

    if let Some(start) = literal_start {
        push_literal(&mut terms, &query[start..]);
    }

    terms
}

fn push_literal(terms: &mut Vec<Term>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        terms.push(Term::Literal(text.to_string()));
    }
}

/// The keyword the final path component is checked against.
///
/// This is the trailing piece of the last term once it is split on separators,
/// or the whole term when splitting leaves nothing (a bare separator term).
pub fn last_keyword(terms: &[Term], mode: TokenizerMode) -> Option<&str> {
    let last = terms.last()?.as_str();
    Some(
        last.split(|c: char| mode.is_separator(c))
            .rfind(|piece| !piece.is_empty())
            .unwrap_or(last),
    )
}
