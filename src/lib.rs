//! Scopegate library crate (used by the CLI binary and integration tests).
//!
//! Decides whether a submitted exam/practice question falls within the scope
//! of an ingested course syllabus. The pipeline: split a submission into
//! questions, gate each one on retrieval similarity, classify its rhetorical
//! type, check literal topic grounding, and adjudicate the ambiguous cases
//! through a language model with a strict 3-line response contract.
//!
//! # Public API Surface
//!
//! ## Text Analysis
//! - [`split_questions`] - Segment a submission into questions
//! - [`chunk_syllabus`], [`chunk_sections`] - Bounded syllabus fragments
//! - [`classify`], [`QuestionKind`] - Question-type triage
//! - [`core_terms`], [`is_grounded`] - Literal topic grounding
//!
//! ## Pipeline
//! - [`Analyzer`] - Ingestion plus single/batch question analysis
//! - [`analyze_question`] - The post-retrieval stage as a free function
//! - [`Verdict`], [`GateReport`], [`RetrievedChunk`] - Outcome types
//! - [`adjudicate`], [`Adjudication`], [`Decision`] - Adjudication layer
//!
//! ## Capability Seams
//! - [`Embedder`] / [`StubEmbedder`] - Text embedding
//! - [`VectorSearch`] / [`QdrantClient`] - Nearest-neighbor search
//! - [`CompletionClient`] / [`GenaiCompletion`] - LLM completion
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `SCOPEGATE_*` environment configuration
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature =
//! "mock"))]`.

pub mod adjudicator;
pub mod chunker;
pub mod classify;
pub mod completion;
pub mod config;
pub mod embedding;
pub mod gatekeeper;
pub mod grounding;
pub mod pipeline;
pub mod splitter;
pub mod syllabus;
pub mod vectordb;

pub use adjudicator::{
    Adjudication, AdjudicatorOptions, Decision, FALLBACK_JUSTIFICATION, MAX_PROMPT_CHUNKS,
    MAX_SNIPPET_CHARS, UNKNOWN_MODULE, adjudicate, build_prompt, parse_reply,
};
pub use chunker::{MAX_CHUNK_CHARS, MIN_CHUNK_CHARS, chunk_sections, chunk_syllabus};
pub use classify::{QuestionKind, classify};
pub use completion::{CompletionClient, CompletionConfig, CompletionError, GenaiCompletion};
#[cfg(any(test, feature = "mock"))]
pub use completion::MockCompletion;
pub use config::{Config, ConfigError, DEFAULT_COMPLETION_MODEL, DEFAULT_QDRANT_URL};
pub use embedding::{DEFAULT_EMBEDDING_DIM, Embedder, EmbeddingError, StubEmbedder};
pub use gatekeeper::{
    DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K, GateReport, RetrievedChunk, clamp_similarity,
};
pub use grounding::{CORE_TERM_LIMIT, core_terms, is_grounded};
pub use pipeline::{
    Analyzer, AnalyzerSettings, PipelineError, REASON_BELOW_THRESHOLD, Verdict, analyze_question,
};
pub use splitter::split_questions;
pub use syllabus::{Syllabus, SyllabusChunk, SyllabusMetadata, SyllabusStore};
pub use vectordb::{
    ChunkPoint, DEFAULT_COLLECTION_NAME, QdrantClient, SearchHit, VectorDbError, VectorSearch,
    chunk_point_id,
};

#[cfg(any(test, feature = "mock"))]
pub use vectordb::{MockVectorSearch, ScriptedSearch, cosine_similarity};
