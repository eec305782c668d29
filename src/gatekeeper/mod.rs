//! Retrieval gatekeeper: cheap admission control ahead of adjudication.
//!
//! Similarity is `1 - distance` of the top candidate, clamped into `[0, 1]`.
//! No candidates means similarity 0 and a closed gate.


use serde::{Deserialize, Serialize};

use crate::vectordb::SearchHit;

/// Default admission threshold.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.2;
/// Default retrieval breadth.
pub const DEFAULT_TOP_K: u64 = 3;

/// One retrieved syllabus fragment, kept on every verdict for observability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub text: String,
    pub distance: f32,
    pub similarity: f32,
    pub module: Option<String>,
    pub syllabus_id: String,
}

impl RetrievedChunk {
    pub fn from_hit(hit: &SearchHit) -> Self {
        Self {
            text: hit.text.clone(),
            distance: hit.distance,
            similarity: clamp_similarity(hit.distance),
            module: hit.module.clone(),
            syllabus_id: hit.syllabus_id.clone(),
        }
    }
}

/// Gatekeeper outcome for one question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateReport {
    pub similarity: f32,
    pub passed: bool,
}

/// Converts a cosine distance into a clamped similarity.
pub fn clamp_similarity(distance: f32) -> f32 {
    (1.0 - distance).clamp(0.0, 1.0)
}

/// Scores the top candidate against `threshold`, failing closed on no hits.
pub fn evaluate(hits: &[SearchHit], threshold: f32) -> GateReport {
    let similarity = hits
        .first()
        .map(|hit| clamp_similarity(hit.distance))
        .unwrap_or(0.0);

    GateReport {
        similarity,
        passed: similarity >= threshold,
    }
}

/// Converts every candidate (not only the top) for the verdict record.
pub fn retrieved_chunks(hits: &[SearchHit]) -> Vec<RetrievedChunk> {
    hits.iter().map(RetrievedChunk::from_hit).collect()
}
