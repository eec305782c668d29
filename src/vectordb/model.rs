use qdrant_client::qdrant::ScoredPoint;
use qdrant_client::qdrant::point_id::PointIdOptions;

/// A syllabus chunk embedding ready for indexing.
#[derive(Debug, Clone)]
pub struct ChunkPoint {
    pub id: u64,
    pub vector: Vec<f32>,
    pub text: String,
    pub module: Option<String>,
    pub syllabus_id: String,
}

impl ChunkPoint {
    pub fn new(
        id: u64,
        vector: Vec<f32>,
        text: impl Into<String>,
        module: Option<String>,
        syllabus_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            vector,
            text: text.into(),
            module,
            syllabus_id: syllabus_id.into(),
        }
    }
}

/// One nearest-neighbor candidate.
///
/// `distance` follows the cosine-distance convention: 0 means identical.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub id: u64,
    pub distance: f32,
    pub text: String,
    pub module: Option<String>,
    pub syllabus_id: String,
}

impl SearchHit {
    /// Converts a Qdrant scored point (cosine *similarity* score) into a hit.
    ///
    /// Points without a numeric id or a text payload are dropped.
    pub fn from_scored_point(point: ScoredPoint) -> Option<Self> {
        let id = match point.id.and_then(|pid| pid.point_id_options) {
            Some(PointIdOptions::Num(n)) => n,
            _ => return None,
        };

        let payload = point.payload;

        let text = payload.get("text").and_then(|v| v.as_str())?.to_string();

        let module = payload
            .get("module")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let syllabus_id = payload
            .get("syllabus_id")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or_default();

        Some(SearchHit {
            id,
            distance: 1.0 - point.score,
            text,
            module,
            syllabus_id,
        })
    }
}

/// Derives a stable point id from a syllabus id and chunk index.
pub fn chunk_point_id(syllabus_id: &str, index: usize) -> u64 {
    use std::hash::{DefaultHasher, Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    syllabus_id.hash(&mut hasher);
    hasher
        .finish()
        .wrapping_mul(0x517cc1b727220a95)
        .wrapping_add(index as u64)
}
