use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    /// Rejected at construction time.
    #[error("invalid completion configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The provider call failed (network, provider error, timeout).
    #[error("completion request failed: {reason}")]
    RequestFailed { reason: String },

    /// The provider returned no text content.
    #[error("completion returned an empty response")]
    EmptyResponse,
}
