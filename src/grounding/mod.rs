//! Literal topic grounding.
//!
//! Extracts up to four "core terms" from a question (alphabetic tokens minus
//! a small stopword list, order preserved) and checks whether any of them
//! appears verbatim in the retrieved syllabus text. Substring match, not
//! word-boundary match: "encrypt" grounds against "encryption".


use std::sync::LazyLock;

use regex::Regex;

use crate::gatekeeper::RetrievedChunk;

/// At most this many core terms are kept.
pub const CORE_TERM_LIMIT: usize = 4;

const STOPWORDS: [&str; 11] = [
    "what", "is", "the", "of", "and", "in", "to", "explain", "define", "describe", "how",
];

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("word pattern is valid"));

/// Extracts the first [`CORE_TERM_LIMIT`] non-stopword alphabetic tokens.
pub fn core_terms(question: &str) -> Vec<String> {
    let lower = question.to_lowercase();

    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|token| !STOPWORDS.contains(&token.as_str()))
        .take(CORE_TERM_LIMIT)
        .collect()
}

/// True iff at least one core term occurs in the concatenated chunk text.
pub fn is_grounded(question: &str, chunks: &[RetrievedChunk]) -> bool {
    let terms = core_terms(question);
    if terms.is_empty() {
        return false;
    }

    let haystack = chunks
        .iter()
        .map(|chunk| chunk.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    terms.iter().any(|term| haystack.contains(term.as_str()))
}
