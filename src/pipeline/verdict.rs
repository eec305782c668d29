use serde::{Deserialize, Serialize};

use crate::adjudicator::Adjudication;
use crate::gatekeeper::RetrievedChunk;

/// Reason attached to verdicts rejected by the gatekeeper.
pub const REASON_BELOW_THRESHOLD: &str = "Below similarity threshold";

/// The complete outcome for one question.
///
/// Invariants: `in_syllabus` implies `gatekeeper_passed`, and `adjudication`
/// is present only when the gatekeeper passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub question: String,
    pub similarity: f32,
    pub gatekeeper_passed: bool,
    pub in_syllabus: bool,
    pub reason: String,
    pub top_chunks: Vec<RetrievedChunk>,
    pub adjudication: Option<Adjudication>,
}

impl Verdict {
    /// Terminal verdict for a question the gatekeeper rejected.
    pub fn rejected(question: &str, similarity: f32, top_chunks: Vec<RetrievedChunk>) -> Self {
        Self {
            question: question.to_string(),
            similarity,
            gatekeeper_passed: false,
            in_syllabus: false,
            reason: REASON_BELOW_THRESHOLD.to_string(),
            top_chunks,
            adjudication: None,
        }
    }

    /// Verdict for a gatekeeper-passed question, derived from adjudication.
    pub fn adjudicated(
        question: &str,
        similarity: f32,
        top_chunks: Vec<RetrievedChunk>,
        adjudication: Adjudication,
    ) -> Self {
        Self {
            question: question.to_string(),
            similarity,
            gatekeeper_passed: true,
            in_syllabus: adjudication.decision.is_yes(),
            reason: adjudication.justification.clone(),
            top_chunks,
            adjudication: Some(adjudication),
        }
    }
}
