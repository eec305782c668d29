//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SCOPEGATE_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::adjudicator::AdjudicatorOptions;
use crate::completion::{
    CompletionConfig, DEFAULT_COMPLETION_THREADS, DEFAULT_CONTEXT_WINDOW,
    DEFAULT_MAX_COMPLETION_TOKENS,
};
use crate::embedding::DEFAULT_EMBEDDING_DIM;
use crate::gatekeeper::{DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K};
use crate::pipeline::AnalyzerSettings;
use crate::vectordb::DEFAULT_COLLECTION_NAME;

/// Default Qdrant URL used when `SCOPEGATE_QDRANT_URL` is not set.
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6334";

/// Default provider model for adjudication.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";

/// Pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SCOPEGATE_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gatekeeper admission threshold. Default: `0.2`.
    pub similarity_threshold: f32,

    /// Retrieval breadth. Default: `3`.
    pub top_k: u64,

    /// Qdrant endpoint URL. Default: `http://localhost:6334`.
    pub qdrant_url: String,

    /// Vector collection name. Default: `syllabus_chunks`.
    pub collection: String,

    /// Embedding vector dimension. Default: `768`.
    pub embedding_dim: u64,

    /// Completion model name. Default: `gpt-4o-mini`.
    pub completion_model: String,

    /// Output token cap per adjudication call. Default: `120`.
    pub max_completion_tokens: u32,

    /// Context window assumed for the completion model. Default: `2048`.
    pub context_window: u32,

    /// Thread hint for local inference backends. Default: `4`.
    pub completion_threads: u32,

    /// Inject salient topics into adjudication prompts. Default: `false`.
    pub topic_hints: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            qdrant_url: DEFAULT_QDRANT_URL.to_string(),
            collection: DEFAULT_COLLECTION_NAME.to_string(),
            embedding_dim: DEFAULT_EMBEDDING_DIM as u64,
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            max_completion_tokens: DEFAULT_MAX_COMPLETION_TOKENS,
            context_window: DEFAULT_CONTEXT_WINDOW,
            completion_threads: DEFAULT_COMPLETION_THREADS,
            topic_hints: false,
        }
    }
}

impl Config {
    const ENV_SIMILARITY_THRESHOLD: &'static str = "SCOPEGATE_SIMILARITY_THRESHOLD";
    const ENV_TOP_K: &'static str = "SCOPEGATE_TOP_K";
    const ENV_QDRANT_URL: &'static str = "SCOPEGATE_QDRANT_URL";
    const ENV_COLLECTION: &'static str = "SCOPEGATE_COLLECTION";
    const ENV_EMBEDDING_DIM: &'static str = "SCOPEGATE_EMBEDDING_DIM";
    const ENV_COMPLETION_MODEL: &'static str = "SCOPEGATE_COMPLETION_MODEL";
    const ENV_MAX_COMPLETION_TOKENS: &'static str = "SCOPEGATE_MAX_COMPLETION_TOKENS";
    const ENV_CONTEXT_WINDOW: &'static str = "SCOPEGATE_CONTEXT_WINDOW";
    const ENV_COMPLETION_THREADS: &'static str = "SCOPEGATE_COMPLETION_THREADS";
    const ENV_TOPIC_HINTS: &'static str = "SCOPEGATE_TOPIC_HINTS";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let similarity_threshold =
            Self::parse_threshold_from_env(defaults.similarity_threshold)?;
        let top_k = Self::parse_u64_from_env(Self::ENV_TOP_K, defaults.top_k);
        let qdrant_url = Self::parse_string_from_env(Self::ENV_QDRANT_URL, defaults.qdrant_url);
        let collection = Self::parse_string_from_env(Self::ENV_COLLECTION, defaults.collection);
        let embedding_dim =
            Self::parse_u64_from_env(Self::ENV_EMBEDDING_DIM, defaults.embedding_dim);
        let completion_model =
            Self::parse_string_from_env(Self::ENV_COMPLETION_MODEL, defaults.completion_model);
        let max_completion_tokens = Self::parse_u32_from_env(
            Self::ENV_MAX_COMPLETION_TOKENS,
            defaults.max_completion_tokens,
        );
        let context_window =
            Self::parse_u32_from_env(Self::ENV_CONTEXT_WINDOW, defaults.context_window);
        let completion_threads =
            Self::parse_u32_from_env(Self::ENV_COMPLETION_THREADS, defaults.completion_threads);
        let topic_hints = Self::parse_bool_from_env(Self::ENV_TOPIC_HINTS, defaults.topic_hints);

        Ok(Self {
            similarity_threshold,
            top_k,
            qdrant_url,
            collection,
            embedding_dim,
            completion_model,
            max_completion_tokens,
            context_window,
            completion_threads,
            topic_hints,
        })
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.similarity_threshold,
            });
        }

        if self.top_k == 0 {
            return Err(ConfigError::InvalidTopK);
        }

        if self.embedding_dim == 0 {
            return Err(ConfigError::InvalidEmbeddingDim);
        }

        if self.completion_model.trim().is_empty() {
            return Err(ConfigError::EmptyModelName);
        }

        if self.max_completion_tokens == 0 || self.max_completion_tokens > self.context_window {
            return Err(ConfigError::InvalidCompletionBudget {
                max_tokens: self.max_completion_tokens,
                context_window: self.context_window,
            });
        }

        Ok(())
    }

    /// Completion parameters for the adjudication client.
    pub fn completion_config(&self) -> CompletionConfig {
        CompletionConfig {
            model: self.completion_model.clone(),
            max_tokens: self.max_completion_tokens,
            temperature: 0.0,
            context_window: self.context_window,
            threads: self.completion_threads,
            stop_sequences: Vec::new(),
        }
    }

    /// Pipeline settings for the [`crate::pipeline::Analyzer`].
    pub fn analyzer_settings(&self) -> AnalyzerSettings {
        AnalyzerSettings {
            similarity_threshold: self.similarity_threshold,
            top_k: self.top_k,
            collection: self.collection.clone(),
            adjudicator: AdjudicatorOptions {
                topic_hints: self.topic_hints,
            },
        }
    }

    fn parse_threshold_from_env(default: f32) -> Result<f32, ConfigError> {
        match env::var(Self::ENV_SIMILARITY_THRESHOLD) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::ThresholdParseError { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn parse_u32_from_env(var_name: &str, default: u32) -> u32 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn parse_bool_from_env(var_name: &str, default: bool) -> bool {
        env::var(var_name)
            .ok()
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "True"))
            .unwrap_or(default)
    }
}
