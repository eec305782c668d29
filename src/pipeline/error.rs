use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::vectordb::VectorDbError;

#[derive(Debug, Error)]
/// Request-level pipeline failures.
///
/// Per-question semantic outcomes (empty retrieval, adjudication failure)
/// never surface here; they fold into verdicts.
pub enum PipelineError {
    /// Empty or whitespace-only question submission.
    #[error("question text is empty")]
    EmptyQuestion,

    /// Empty or whitespace-only syllabus text at ingestion.
    #[error("syllabus text is empty")]
    EmptySyllabus,

    /// Embedding infrastructure failure.
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Vector index infrastructure failure.
    #[error("vector search failed: {0}")]
    VectorDb(#[from] VectorDbError),
}
