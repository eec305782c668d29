use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The backing model resource is missing or failed to initialize.
    #[error("embedding model unavailable: {reason}")]
    ModelUnavailable { reason: String },

    /// Inference on otherwise valid input failed.
    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },
}
