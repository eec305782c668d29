use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The threshold env var was not a number.
    #[error("failed to parse similarity threshold '{value}'")]
    ThresholdParseError {
        /// Raw env value.
        value: String,
        /// Parse error.
        source: std::num::ParseFloatError,
    },

    /// Threshold outside `[0, 1]`.
    #[error("similarity threshold {value} must be within [0, 1]")]
    InvalidThreshold {
        /// Configured value.
        value: f32,
    },

    /// Retrieval breadth of zero.
    #[error("top_k must be at least 1")]
    InvalidTopK,

    /// Embedding dimension of zero.
    #[error("embedding dimension must be positive")]
    InvalidEmbeddingDim,

    /// No completion model configured.
    #[error("completion model name is empty")]
    EmptyModelName,

    /// Output cap missing or beyond the context window.
    #[error("max completion tokens {max_tokens} invalid for context window {context_window}")]
    InvalidCompletionBudget {
        /// Configured output cap.
        max_tokens: u32,
        /// Configured context window.
        context_window: u32,
    },
}
