//! Heuristic question-type triage.
//!
//! Case-insensitive substring matching against fixed marker lists;
//! application markers win over definition markers. False negatives fall
//! through to [`QuestionKind::Unknown`] and are handled permissively
//! downstream.


use serde::{Deserialize, Serialize};

const APPLICATION_MARKERS: [&str; 9] = [
    "case study",
    "scenario",
    "analyze",
    "how would you",
    "design",
    "implement",
    "evaluate",
    "justify",
    "compare",
];

const DEFINITION_MARKERS: [&str; 7] = [
    "what is",
    "define",
    "explain",
    "describe",
    "short note",
    "meaning of",
    "overview of",
];

/// Rhetorical type of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Definition,
    Application,
    Unknown,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Definition => "definition",
            QuestionKind::Application => "application",
            QuestionKind::Unknown => "unknown",
        }
    }
}

/// Classifies a question by marker lookup, first match wins.
pub fn classify(question: &str) -> QuestionKind {
    let lower = question.to_lowercase();

    if APPLICATION_MARKERS.iter().any(|m| lower.contains(m)) {
        return QuestionKind::Application;
    }

    if DEFINITION_MARKERS.iter().any(|m| lower.contains(m)) {
        return QuestionKind::Definition;
    }

    QuestionKind::Unknown
}
