use std::collections::HashMap;

use crate::vectordb::{ChunkPoint, SearchHit, VectorDbError, VectorSearch};

/// In-memory vector index with real cosine ranking.
#[derive(Default)]
pub struct MockVectorSearch {
    collections: std::sync::RwLock<HashMap<String, MockCollection>>,
}

#[derive(Default, Clone)]
struct MockCollection {
    vector_size: u64,
    points: HashMap<u64, StoredChunk>,
}

#[derive(Clone)]
struct StoredChunk {
    vector: Vec<f32>,
    text: String,
    module: Option<String>,
    syllabus_id: String,
}

impl MockVectorSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_count(&self, collection: &str) -> Option<usize> {
        self.collections
            .read()
            .ok()?
            .get(collection)
            .map(|c| c.points.len())
    }
}

impl VectorSearch for MockVectorSearch {
    async fn ensure_collection(&self, name: &str, vector_size: u64) -> Result<(), VectorDbError> {
        let mut collections =
            self.collections
                .write()
                .map_err(|_| VectorDbError::CreateCollectionFailed {
                    collection: name.to_string(),
                    message: "lock poisoned".to_string(),
                })?;

        collections
            .entry(name.to_string())
            .or_insert(MockCollection {
                vector_size,
                points: HashMap::new(),
            });

        Ok(())
    }

    async fn upsert_chunks(
        &self,
        collection: &str,
        points: Vec<ChunkPoint>,
    ) -> Result<(), VectorDbError> {
        let mut collections =
            self.collections
                .write()
                .map_err(|_| VectorDbError::UpsertFailed {
                    collection: collection.to_string(),
                    message: "lock poisoned".to_string(),
                })?;

        let coll =
            collections
                .get_mut(collection)
                .ok_or_else(|| VectorDbError::CollectionNotFound {
                    collection: collection.to_string(),
                })?;

        for point in points {
            if point.vector.len() as u64 != coll.vector_size {
                return Err(VectorDbError::InvalidDimension {
                    expected: coll.vector_size as usize,
                    actual: point.vector.len(),
                });
            }

            coll.points.insert(
                point.id,
                StoredChunk {
                    vector: point.vector,
                    text: point.text,
                    module: point.module,
                    syllabus_id: point.syllabus_id,
                },
            );
        }

        Ok(())
    }

    async fn search(
        &self,
        collection: &str,
        query: Vec<f32>,
        limit: u64,
        syllabus_filter: Option<&str>,
    ) -> Result<Vec<SearchHit>, VectorDbError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| VectorDbError::SearchFailed {
                collection: collection.to_string(),
                message: "lock poisoned".to_string(),
            })?;

        let coll =
            collections
                .get(collection)
                .ok_or_else(|| VectorDbError::CollectionNotFound {
                    collection: collection.to_string(),
                })?;

        let mut hits: Vec<SearchHit> = coll
            .points
            .iter()
            .filter(|(_, p)| syllabus_filter.is_none_or(|id| id == p.syllabus_id))
            .map(|(&id, p)| SearchHit {
                id,
                distance: 1.0 - cosine_similarity(&query, &p.vector),
                text: p.text.clone(),
                module: p.module.clone(),
                syllabus_id: p.syllabus_id.clone(),
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        hits.truncate(limit as usize);
        Ok(hits)
    }
}

/// Preset hits, returned verbatim for every query.
///
/// Lets tests pin exact distances without reasoning about stub embeddings.
#[derive(Default)]
pub struct ScriptedSearch {
    hits: Vec<SearchHit>,
}

impl ScriptedSearch {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self { hits }
    }

    /// A scripted hit with only the fields tests usually care about.
    pub fn hit(distance: f32, text: &str, module: Option<&str>) -> SearchHit {
        SearchHit {
            id: 0,
            distance,
            text: text.to_string(),
            module: module.map(ToOwned::to_owned),
            syllabus_id: String::new(),
        }
    }
}

impl VectorSearch for ScriptedSearch {
    async fn ensure_collection(&self, _name: &str, _vector_size: u64) -> Result<(), VectorDbError> {
        Ok(())
    }

    async fn upsert_chunks(
        &self,
        _collection: &str,
        _points: Vec<ChunkPoint>,
    ) -> Result<(), VectorDbError> {
        Ok(())
    }

    async fn search(
        &self,
        _collection: &str,
        _query: Vec<f32>,
        limit: u64,
        _syllabus_filter: Option<&str>,
    ) -> Result<Vec<SearchHit>, VectorDbError> {
        let mut hits = self.hits.clone();
        hits.truncate(limit as usize);
        Ok(hits)
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
