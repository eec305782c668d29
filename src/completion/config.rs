use super::error::CompletionError;

/// Output cap for one adjudication reply.
pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 120;
/// Context window assumed for prompt budgeting.
pub const DEFAULT_CONTEXT_WINDOW: u32 = 2048;
/// Parallelism hint for local inference backends.
pub const DEFAULT_COMPLETION_THREADS: u32 = 4;

/// Sampling and runtime parameters for the completion capability.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Provider model name.
    pub model: String,

    /// Output token cap per call.
    pub max_tokens: u32,

    /// Sampling temperature. 0 keeps adjudication deterministic.
    pub temperature: f64,

    /// Context window of the backing model.
    pub context_window: u32,

    /// Thread hint for local inference backends; ignored by remote providers.
    pub threads: u32,

    /// Stop sequences forwarded to the provider.
    pub stop_sequences: Vec<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tokens: DEFAULT_MAX_COMPLETION_TOKENS,
            temperature: 0.0,
            context_window: DEFAULT_CONTEXT_WINDOW,
            threads: DEFAULT_COMPLETION_THREADS,
            stop_sequences: Vec::new(),
        }
    }
}

impl CompletionConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), CompletionError> {
        if self.model.trim().is_empty() {
            return Err(CompletionError::InvalidConfig {
                reason: "model name is empty".to_string(),
            });
        }

        if self.max_tokens == 0 {
            return Err(CompletionError::InvalidConfig {
                reason: "max_tokens must be positive".to_string(),
            });
        }

        if self.max_tokens > self.context_window {
            return Err(CompletionError::InvalidConfig {
                reason: format!(
                    "max_tokens ({}) exceeds context window ({})",
                    self.max_tokens, self.context_window
                ),
            });
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(CompletionError::InvalidConfig {
                reason: format!("temperature {} out of range", self.temperature),
            });
        }

        Ok(())
    }
}
