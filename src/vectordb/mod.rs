//! Vector index seam: nearest-neighbor search over syllabus chunks.
//!
//! The persistent index is an external collaborator; [`QdrantClient`] adapts
//! it behind the [`VectorSearch`] trait. Hits follow the cosine-*distance*
//! convention (0 = identical) regardless of the backend's native scoring.

pub mod client;
mod error;
pub mod model;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use client::{QdrantClient, VectorSearch};
pub use error::VectorDbError;
pub use model::{ChunkPoint, SearchHit, chunk_point_id};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockVectorSearch, ScriptedSearch, cosine_similarity};

/// Default collection holding syllabus chunk embeddings.
pub const DEFAULT_COLLECTION_NAME: &str = "syllabus_chunks";
