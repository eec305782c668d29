//! Completion seam: the language-model capability behind adjudication.
//!
//! The model handle is constructed once, injected, and treated as NOT safe
//! for concurrent invocation; [`GenaiCompletion`] serializes calls through an
//! async mutex. Invocation is deterministic: temperature 0, bounded output,
//! no streaming.

pub mod config;
mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use config::{
    CompletionConfig, DEFAULT_COMPLETION_THREADS, DEFAULT_CONTEXT_WINDOW,
    DEFAULT_MAX_COMPLETION_TOKENS,
};
pub use error::CompletionError;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockCompletion;

use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use tokio::sync::Mutex;
use tracing::debug;

/// Prompt-in, text-out completion capability.
pub trait CompletionClient: Send + Sync {
    /// Runs one completion for `prompt`.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}

/// Provider-backed completion client (via `genai`).
pub struct GenaiCompletion {
    client: Client,
    config: CompletionConfig,
    // Serializes invocations; the backing model is expensive and not assumed
    // concurrency-safe.
    guard: Mutex<()>,
}

impl std::fmt::Debug for GenaiCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiCompletion")
            .field("model", &self.config.model)
            .field("max_tokens", &self.config.max_tokens)
            .finish_non_exhaustive()
    }
}

impl GenaiCompletion {
    /// Builds the client handle. Fails fast on an invalid configuration.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        config.validate()?;

        Ok(Self {
            client: Client::default(),
            config,
            guard: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }
}

impl CompletionClient for GenaiCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let _serialized = self.guard.lock().await;

        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

        let mut options = ChatOptions::default()
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);
        if !self.config.stop_sequences.is_empty() {
            options = options.with_stop_sequences(self.config.stop_sequences.clone());
        }

        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Invoking completion"
        );

        let response = self
            .client
            .exec_chat(&self.config.model, request, Some(&options))
            .await
            .map_err(|e| CompletionError::RequestFailed {
                reason: e.to_string(),
            })?;

        response
            .first_text()
            .map(|text| text.to_string())
            .ok_or(CompletionError::EmptyResponse)
    }
}
