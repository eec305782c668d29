use super::*;

#[test]
fn test_chunk_point_id_is_stable() {
    let a = chunk_point_id("syllabus-a", 0);
    let b = chunk_point_id("syllabus-a", 0);
    assert_eq!(a, b);
}

#[test]
fn test_chunk_point_id_varies_by_index_and_syllabus() {
    let base = chunk_point_id("syllabus-a", 0);
    assert_ne!(base, chunk_point_id("syllabus-a", 1));
    assert_ne!(base, chunk_point_id("syllabus-b", 0));
}

#[test]
fn test_cosine_similarity_identical() {
    let v = vec![0.6, 0.8];
    assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
}

#[test]
fn test_cosine_similarity_orthogonal() {
    let a = vec![1.0, 0.0];
    let b = vec![0.0, 1.0];
    assert!(cosine_similarity(&a, &b).abs() < 1e-6);
}

#[test]
fn test_cosine_similarity_degenerate_inputs() {
    assert_eq!(cosine_similarity(&[], &[]), 0.0);
    assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
}

#[tokio::test]
async fn test_mock_upsert_and_search() {
    let mock = MockVectorSearch::new();
    mock.ensure_collection("c", 2).await.unwrap();

    mock.upsert_chunks(
        "c",
        vec![
            ChunkPoint::new(1, vec![1.0, 0.0], "alpha chunk", None, "syl-1"),
            ChunkPoint::new(
                2,
                vec![0.0, 1.0],
                "beta chunk",
                Some("Module 2".to_string()),
                "syl-1",
            ),
        ],
    )
    .await
    .unwrap();

    assert_eq!(mock.point_count("c"), Some(2));

    let hits = mock.search("c", vec![1.0, 0.0], 2, None).await.unwrap();
    assert_eq!(hits.len(), 2);
    // Nearest first: identical vector has distance ~0.
    assert_eq!(hits[0].id, 1);
    assert!(hits[0].distance.abs() < 1e-6);
    assert!(hits[1].distance > hits[0].distance);
}

#[tokio::test]
async fn test_mock_search_respects_limit() {
    let mock = MockVectorSearch::new();
    mock.ensure_collection("c", 2).await.unwrap();

    let points = (0..5)
        .map(|i| ChunkPoint::new(i, vec![1.0, i as f32], format!("chunk {i}"), None, "syl-1"))
        .collect();
    mock.upsert_chunks("c", points).await.unwrap();

    let hits = mock.search("c", vec![1.0, 0.0], 3, None).await.unwrap();
    assert_eq!(hits.len(), 3);
}

#[tokio::test]
async fn test_mock_search_syllabus_filter() {
    let mock = MockVectorSearch::new();
    mock.ensure_collection("c", 2).await.unwrap();

    mock.upsert_chunks(
        "c",
        vec![
            ChunkPoint::new(1, vec![1.0, 0.0], "first syllabus chunk", None, "syl-1"),
            ChunkPoint::new(2, vec![1.0, 0.0], "second syllabus chunk", None, "syl-2"),
        ],
    )
    .await
    .unwrap();

    let hits = mock
        .search("c", vec![1.0, 0.0], 10, Some("syl-2"))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].syllabus_id, "syl-2");
}

#[tokio::test]
async fn test_mock_rejects_dimension_mismatch() {
    let mock = MockVectorSearch::new();
    mock.ensure_collection("c", 3).await.unwrap();

    let result = mock
        .upsert_chunks(
            "c",
            vec![ChunkPoint::new(1, vec![1.0, 0.0], "short vector", None, "syl-1")],
        )
        .await;

    assert!(matches!(
        result,
        Err(VectorDbError::InvalidDimension {
            expected: 3,
            actual: 2
        })
    ));
}

#[tokio::test]
async fn test_mock_unknown_collection() {
    let mock = MockVectorSearch::new();
    let result = mock.search("missing", vec![1.0], 3, None).await;
    assert!(matches!(
        result,
        Err(VectorDbError::CollectionNotFound { .. })
    ));
}

#[tokio::test]
async fn test_scripted_search_returns_preset_hits() {
    let search = ScriptedSearch::new(vec![
        ScriptedSearch::hit(0.1, "encryption basics and key management", Some("Module 1")),
        ScriptedSearch::hit(0.4, "network protocols overview", None),
    ]);

    let hits = search.search("any", vec![0.0], 3, None).await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].distance, 0.1);
    assert_eq!(hits[0].module.as_deref(), Some("Module 1"));

    let capped = search.search("any", vec![0.0], 1, None).await.unwrap();
    assert_eq!(capped.len(), 1);
}
