//! LLM adjudication for questions the deterministic rules cannot settle.
//!
//! Definition and recognizably grounded questions are decided without a
//! model call; only application-type questions reach the completion seam.
//! The model's reply must follow a strict 3-line contract
//! (`DECISION` / `JUSTIFICATION` / `MODULE`); anything malformed degrades to
//! a NO decision instead of an error.

pub mod parse;
pub mod prompt;


pub use parse::{FALLBACK_JUSTIFICATION, parse_reply};
pub use prompt::{MAX_PROMPT_CHUNKS, MAX_SNIPPET_CHARS, MAX_TOPIC_HINTS, build_prompt};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classify::QuestionKind;
use crate::completion::CompletionClient;
use crate::gatekeeper::RetrievedChunk;

/// Module attribution used when none can be determined.
pub const UNKNOWN_MODULE: &str = "unknown";

/// Terminal adjudication decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Yes,
    No,
}

impl Decision {
    pub fn is_yes(&self) -> bool {
        matches!(self, Decision::Yes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Yes => "YES",
            Decision::No => "NO",
        }
    }
}

/// Outcome of adjudicating one gatekeeper-passed question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjudication {
    pub decision: Decision,
    pub justification: String,
    pub module: String,
}

impl Adjudication {
    fn deterministic(decision: Decision, justification: &str, module: String) -> Self {
        Self {
            decision,
            justification: justification.to_string(),
            module,
        }
    }
}

/// Prompt-shaping options for the LLM path.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjudicatorOptions {
    /// Inject salient syllabus topics into the prompt as an auxiliary
    /// grounding signal.
    pub topic_hints: bool,
}

/// Decides whether a gatekeeper-passed question is answerable from the
/// syllabus.
///
/// Deterministic branches resolve without a model call; application-type
/// questions invoke `completion`, and any failure there folds into a NO
/// adjudication rather than propagating.
pub async fn adjudicate<C: CompletionClient>(
    question: &str,
    kind: QuestionKind,
    grounded: bool,
    chunks: &[RetrievedChunk],
    completion: &C,
    options: &AdjudicatorOptions,
) -> Adjudication {
    debug!(kind = kind.as_str(), grounded, "Adjudicating question");

    match (kind, grounded) {
        (QuestionKind::Definition, true) => Adjudication::deterministic(
            Decision::Yes,
            "The topic is explicitly listed in the syllabus.",
            top_module(chunks),
        ),
        (QuestionKind::Definition, false) => Adjudication::deterministic(
            Decision::No,
            "The topic is not mentioned in the syllabus.",
            UNKNOWN_MODULE.to_string(),
        ),
        (QuestionKind::Unknown, true) => Adjudication::deterministic(
            Decision::Yes,
            "The question is grounded in syllabus topics.",
            top_module(chunks),
        ),
        (QuestionKind::Application, _) => {
            adjudicate_with_model(question, chunks, completion, options).await
        }
        (QuestionKind::Unknown, false) => Adjudication::deterministic(
            Decision::No,
            "Could not confidently ground the question in the syllabus.",
            UNKNOWN_MODULE.to_string(),
        ),
    }
}

async fn adjudicate_with_model<C: CompletionClient>(
    question: &str,
    chunks: &[RetrievedChunk],
    completion: &C,
    options: &AdjudicatorOptions,
) -> Adjudication {
    let prompt = build_prompt(question, chunks, options);

    match completion.complete(&prompt).await {
        Ok(raw) => parse_reply(&raw),
        Err(e) => {
            warn!(error = %e, "Completion call failed, defaulting to rejection");
            Adjudication {
                decision: Decision::No,
                justification: format!("Adjudication unavailable: {e}"),
                module: UNKNOWN_MODULE.to_string(),
            }
        }
    }
}

/// Module of the top retrieved chunk, or `"unknown"`.
fn top_module(chunks: &[RetrievedChunk]) -> String {
    chunks
        .first()
        .and_then(|chunk| chunk.module.clone())
        .unwrap_or_else(|| UNKNOWN_MODULE.to_string())
}
