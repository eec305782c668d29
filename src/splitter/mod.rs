//! Question splitting for multi-question submissions.
//!
//! Submissions frequently arrive as one blob containing several labeled
//! questions (`Q1: ...`, `Q2. ...`). [`split_questions`] segments such a blob
//! into individual question strings, falling back to line splitting and then
//! to the whole input when no labels are present.


use std::sync::LazyLock;

use regex::Regex;

/// Question label: `Q` + integer + `:` or `.` (optional whitespace between).
static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Q\d+\s*[:.]").expect("label pattern is valid"));

/// Splits a raw submission into an ordered list of question strings.
///
/// If at least one `Q<n>:` / `Q<n>.` label is found, the content between
/// consecutive labels becomes one question (labels stripped, spans trimmed,
/// empty spans discarded). Text before the first label is ignored. Without
/// labels, non-empty lines are returned; if that yields at most one entry the
/// whole trimmed input is returned as a single question. Empty or
/// whitespace-only input yields an empty list.
pub fn split_questions(raw: &str) -> Vec<String> {
    let text = raw.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let labels: Vec<(usize, usize)> = LABEL_RE
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    if !labels.is_empty() {
        let mut questions = Vec::with_capacity(labels.len());
        for (i, &(_, end)) in labels.iter().enumerate() {
            let span_end = labels.get(i + 1).map(|&(start, _)| start).unwrap_or(text.len());
            let body = text[end..span_end].trim();
            if !body.is_empty() {
                questions.push(body.to_string());
            }
        }
        return questions;
    }

    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    if lines.len() > 1 {
        return lines;
    }

    vec![text.to_string()]
}
