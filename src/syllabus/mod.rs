//! Syllabus data model and in-process registry.
//!
//! A [`Syllabus`] is created once at ingestion time and never mutated
//! afterward; the [`SyllabusStore`] is append-only. Durable metadata storage
//! is an external concern; the store is the request-scoped registry.

mod store;

#[cfg(test)]
mod tests;

pub use store::SyllabusStore;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bounded fragment of syllabus text, the unit of embedding and retrieval.
///
/// `module` carries the `Module/Unit/Chapter N` heading the fragment fell
/// under, when the source text had one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusChunk {
    pub text: String,
    pub module: Option<String>,
}

impl SyllabusChunk {
    pub fn new(text: impl Into<String>, module: Option<String>) -> Self {
        Self {
            text: text.into(),
            module,
        }
    }
}

/// Descriptive fields captured at ingestion time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusMetadata {
    pub department: String,
    pub program: String,
    pub semester: String,
    pub subject_code: String,
    pub subject_name: String,
}

/// An ingested syllabus: id, ordered immutable chunk list, metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Syllabus {
    id: Uuid,
    chunks: Vec<SyllabusChunk>,
    metadata: SyllabusMetadata,
}

impl Syllabus {
    pub fn new(id: Uuid, chunks: Vec<SyllabusChunk>, metadata: SyllabusMetadata) -> Self {
        Self {
            id,
            chunks,
            metadata,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn chunks(&self) -> &[SyllabusChunk] {
        &self.chunks
    }

    pub fn metadata(&self) -> &SyllabusMetadata {
        &self.metadata
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}
