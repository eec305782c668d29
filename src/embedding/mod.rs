//! Embedding seam.
//!
//! The embedding model itself is an external collaborator; this module
//! defines the [`Embedder`] trait the pipeline consumes plus a deterministic
//! [`StubEmbedder`] for wiring and tests. Real model wrappers implement the
//! trait outside this crate.

mod error;


pub use error::EmbeddingError;

use tracing::warn;

/// Default embedding dimension (matches common sentence-embedding models).
pub const DEFAULT_EMBEDDING_DIM: usize = 768;

/// Text-to-vector capability.
///
/// Implementations must be deterministic: identical text yields an identical
/// vector. Calls are synchronous and blocking.
pub trait Embedder: Send + Sync {
    /// Embeds each text, returning one vector per input in order.
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Output vector dimension.
    fn embedding_dim(&self) -> usize;
}

/// Hash-seeded deterministic embedder (no semantic signal).
///
/// Each text seeds an LCG whose output is L2-normalized. Useful for wiring,
/// tests, and running without a model; distances it produces carry no
/// meaning.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    dim: usize,
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl StubEmbedder {
    pub fn new() -> Self {
        Self::with_dim(DEFAULT_EMBEDDING_DIM)
    }

    pub fn with_dim(dim: usize) -> Self {
        warn!(dim, "Embedder running in STUB mode (no semantic signal)");
        Self { dim }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut embedding = Vec::with_capacity(self.dim);
        let mut state = seed;

        for _ in 0..self.dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        normalize(&mut embedding);
        embedding
    }
}

impl Embedder for StubEmbedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|text| self.embed_one(text)).collect())
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }
}

fn normalize(embedding: &mut [f32]) {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in embedding {
            *x /= norm;
        }
    }
}
