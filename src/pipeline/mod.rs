//! Per-question and batch orchestration.
//!
//! One shared pipeline serves both the single- and multi-question entry
//! points: embed the question, search the index, gate on similarity, and
//! adjudicate survivors. Batch processing runs each question independently,
//! preserving input order; one question's degraded adjudication never aborts
//! the batch.

mod error;
mod verdict;


pub use error::PipelineError;
pub use verdict::{REASON_BELOW_THRESHOLD, Verdict};

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::adjudicator::{AdjudicatorOptions, adjudicate};
use crate::chunker::chunk_sections;
use crate::classify::classify;
use crate::completion::CompletionClient;
use crate::embedding::{Embedder, EmbeddingError};
use crate::gatekeeper::{self, DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K, RetrievedChunk};
use crate::grounding::is_grounded;
use crate::splitter::split_questions;
use crate::syllabus::{Syllabus, SyllabusMetadata, SyllabusStore};
use crate::vectordb::{ChunkPoint, DEFAULT_COLLECTION_NAME, VectorSearch, chunk_point_id};

/// Pipeline settings shared by ingestion and analysis.
#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    /// Admission threshold for the gatekeeper.
    pub similarity_threshold: f32,

    /// Retrieval breadth.
    pub top_k: u64,

    /// Vector index collection name.
    pub collection: String,

    /// Prompt-shaping options for the adjudicator.
    pub adjudicator: AdjudicatorOptions,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            collection: DEFAULT_COLLECTION_NAME.to_string(),
            adjudicator: AdjudicatorOptions::default(),
        }
    }
}

/// Owns the capability seams and runs the question pipeline.
pub struct Analyzer<E, V, C> {
    embedder: E,
    search: V,
    completion: C,
    store: SyllabusStore,
    settings: AnalyzerSettings,
}

impl<E, V, C> std::fmt::Debug for Analyzer<E, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("settings", &self.settings)
            .field("syllabi", &self.store.len())
            .finish_non_exhaustive()
    }
}

impl<E, V, C> Analyzer<E, V, C>
where
    E: Embedder,
    V: VectorSearch,
    C: CompletionClient,
{
    pub fn new(embedder: E, search: V, completion: C, settings: AnalyzerSettings) -> Self {
        Self {
            embedder,
            search,
            completion,
            store: SyllabusStore::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    pub fn store(&self) -> &SyllabusStore {
        &self.store
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    pub fn vector_search(&self) -> &V {
        &self.search
    }

    pub fn completion(&self) -> &C {
        &self.completion
    }

    /// Ensures the chunk collection exists in the index.
    pub async fn ensure_collection(&self) -> Result<(), PipelineError> {
        self.search
            .ensure_collection(&self.settings.collection, self.embedder.embedding_dim() as u64)
            .await?;
        Ok(())
    }

    /// Ingests a syllabus: chunk, embed, index, register.
    ///
    /// The returned id addresses the immutable registered syllabus.
    #[instrument(skip(self, raw_text, metadata), fields(text_len = raw_text.len()))]
    pub async fn ingest_syllabus(
        &self,
        raw_text: &str,
        metadata: SyllabusMetadata,
    ) -> Result<Uuid, PipelineError> {
        if raw_text.trim().is_empty() {
            return Err(PipelineError::EmptySyllabus);
        }

        let chunks = chunk_sections(raw_text);
        let id = Uuid::new_v4();

        if chunks.is_empty() {
            warn!(syllabus_id = %id, "Chunker retained nothing from syllabus text");
        } else {
            let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
            let vectors = self.embedder.embed(&texts)?;

            let syllabus_id = id.to_string();
            let points: Vec<ChunkPoint> = chunks
                .iter()
                .zip(vectors)
                .enumerate()
                .map(|(index, (chunk, vector))| {
                    ChunkPoint::new(
                        chunk_point_id(&syllabus_id, index),
                        vector,
                        chunk.text.clone(),
                        chunk.module.clone(),
                        syllabus_id.clone(),
                    )
                })
                .collect();

            self.search
                .upsert_chunks(&self.settings.collection, points)
                .await?;
        }

        let chunk_count = chunks.len();
        self.store.insert(Syllabus::new(id, chunks, metadata));

        info!(syllabus_id = %id, chunks = chunk_count, "Syllabus ingested");
        Ok(id)
    }

    /// Analyzes a raw submission, splitting it into questions first.
    ///
    /// Verdicts come back in input order, one per question.
    #[instrument(skip(self, raw_text), fields(text_len = raw_text.len()))]
    pub async fn analyze(&self, raw_text: &str) -> Result<Vec<Verdict>, PipelineError> {
        if raw_text.trim().is_empty() {
            return Err(PipelineError::EmptyQuestion);
        }

        let questions = split_questions(raw_text);
        debug!(count = questions.len(), "Split submission into questions");

        let mut verdicts = Vec::with_capacity(questions.len());
        for question in &questions {
            verdicts.push(self.analyze_one(question).await?);
        }

        Ok(verdicts)
    }

    /// Runs the full pipeline for a single question.
    #[instrument(skip(self, question), fields(question_len = question.len()))]
    pub async fn analyze_one(&self, question: &str) -> Result<Verdict, PipelineError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(PipelineError::EmptyQuestion);
        }

        let query = self
            .embedder
            .embed(&[question])?
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: "embedder returned no vector".to_string(),
            })?;

        let hits = self
            .search
            .search(&self.settings.collection, query, self.settings.top_k, None)
            .await?;

        let report = gatekeeper::evaluate(&hits, self.settings.similarity_threshold);
        let top_chunks = gatekeeper::retrieved_chunks(&hits);

        debug!(
            similarity = report.similarity,
            passed = report.passed,
            candidates = top_chunks.len(),
            "Gatekeeper evaluated"
        );

        Ok(analyze_question(
            question,
            report.similarity,
            self.settings.similarity_threshold,
            top_chunks,
            &self.completion,
            &self.settings.adjudicator,
        )
        .await)
    }
}

/// Post-retrieval stage: gate on `similarity`, then classify, ground, and
/// adjudicate.
///
/// Shared by single- and batch-question entry points; callers that already
/// ran retrieval can invoke it directly.
pub async fn analyze_question<C: CompletionClient>(
    question: &str,
    similarity: f32,
    threshold: f32,
    top_chunks: Vec<RetrievedChunk>,
    completion: &C,
    options: &AdjudicatorOptions,
) -> Verdict {
    if similarity < threshold {
        return Verdict::rejected(question, similarity, top_chunks);
    }

    let kind = classify(question);
    let grounded = is_grounded(question, &top_chunks);

    let adjudication = adjudicate(question, kind, grounded, &top_chunks, completion, options).await;

    Verdict::adjudicated(question, similarity, top_chunks, adjudication)
}
