//! Syllabus ingestion against the in-memory vector index.

mod common;

use common::{SECURITY_SYLLABUS, metadata};
use scopegate::chunker::{MAX_CHUNK_CHARS, MIN_CHUNK_CHARS};
use scopegate::completion::MockCompletion;
use scopegate::embedding::StubEmbedder;
use scopegate::pipeline::{Analyzer, AnalyzerSettings, PipelineError};
use scopegate::syllabus::SyllabusMetadata;
use scopegate::vectordb::MockVectorSearch;

fn analyzer() -> Analyzer<StubEmbedder, MockVectorSearch, MockCompletion> {
    Analyzer::new(
        StubEmbedder::with_dim(32),
        MockVectorSearch::new(),
        MockCompletion::new(),
        AnalyzerSettings::default(),
    )
}

#[tokio::test]
async fn test_ingest_indexes_every_chunk() {
    let analyzer = analyzer();
    analyzer.ensure_collection().await.unwrap();

    let id = analyzer
        .ingest_syllabus(SECURITY_SYLLABUS, metadata())
        .await
        .unwrap();

    let syllabus = analyzer.store().get(id).expect("registered");
    assert!(syllabus.chunk_count() > 0);

    let indexed = analyzer
        .vector_search()
        .point_count(&analyzer.settings().collection)
        .expect("collection exists");
    assert_eq!(indexed, syllabus.chunk_count());
}

#[tokio::test]
async fn test_ingested_chunks_respect_bounds() {
    let analyzer = analyzer();
    analyzer.ensure_collection().await.unwrap();

    let id = analyzer
        .ingest_syllabus(SECURITY_SYLLABUS, metadata())
        .await
        .unwrap();

    let syllabus = analyzer.store().get(id).unwrap();
    for chunk in syllabus.chunks() {
        let len = chunk.text.chars().count();
        assert!(
            (MIN_CHUNK_CHARS..=MAX_CHUNK_CHARS).contains(&len),
            "chunk length {} out of bounds",
            len
        );
    }
}

#[tokio::test]
async fn test_ingested_chunks_carry_module_tags() {
    let analyzer = analyzer();
    analyzer.ensure_collection().await.unwrap();

    let id = analyzer
        .ingest_syllabus(SECURITY_SYLLABUS, metadata())
        .await
        .unwrap();

    let syllabus = analyzer.store().get(id).unwrap();
    let modules: Vec<Option<&str>> = syllabus
        .chunks()
        .iter()
        .map(|c| c.module.as_deref())
        .collect();

    assert!(modules.contains(&Some("Module 1")));
    assert!(modules.contains(&Some("Module 2")));
    assert!(modules.contains(&Some("Module 3")));
}

#[tokio::test]
async fn test_ingest_preserves_metadata() {
    let analyzer = analyzer();
    analyzer.ensure_collection().await.unwrap();

    let id = analyzer
        .ingest_syllabus(SECURITY_SYLLABUS, metadata())
        .await
        .unwrap();

    let syllabus = analyzer.store().get(id).unwrap();
    assert_eq!(syllabus.metadata().subject_name, "Information Security");
    assert_eq!(syllabus.metadata().subject_code, "CS601");
}

#[tokio::test]
async fn test_store_grows_per_ingest() {
    let analyzer = analyzer();
    analyzer.ensure_collection().await.unwrap();

    for expected in 1..=3 {
        analyzer
            .ingest_syllabus(SECURITY_SYLLABUS, SyllabusMetadata::default())
            .await
            .unwrap();
        assert_eq!(analyzer.store().len(), expected);
    }
}

#[tokio::test]
async fn test_ingest_empty_syllabus_is_input_error() {
    let analyzer = analyzer();
    let result = analyzer
        .ingest_syllabus("   ", SyllabusMetadata::default())
        .await;
    assert!(matches!(result, Err(PipelineError::EmptySyllabus)));
}

#[tokio::test]
async fn test_end_to_end_over_real_cosine_index() {
    // Full loop through the in-memory index: stub embeddings are
    // deterministic, so querying with a chunk's exact text retrieves that
    // chunk at distance ~0 and the gatekeeper passes.
    let analyzer = analyzer();
    analyzer.ensure_collection().await.unwrap();
    analyzer
        .ingest_syllabus(SECURITY_SYLLABUS, metadata())
        .await
        .unwrap();

    let probe = "Classical ciphers, symmetric encryption and block cipher modes";
    let verdict = analyzer.analyze_one(probe).await.unwrap();

    assert!(verdict.gatekeeper_passed);
    assert!((verdict.similarity - 1.0).abs() < 1e-3);
    assert_eq!(verdict.top_chunks[0].text, probe);
}
