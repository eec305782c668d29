use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use super::{Syllabus, SyllabusMetadata};

/// Append-only registry of ingested syllabi.
///
/// Entries are inserted at ingestion time and never updated or removed.
#[derive(Debug, Default)]
pub struct SyllabusStore {
    inner: RwLock<HashMap<Uuid, Arc<Syllabus>>>,
}

impl SyllabusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a syllabus and returns the shared handle.
    pub fn insert(&self, syllabus: Syllabus) -> Arc<Syllabus> {
        let entry = Arc::new(syllabus);
        self.inner.write().insert(entry.id(), Arc::clone(&entry));
        entry
    }

    pub fn get(&self, id: Uuid) -> Option<Arc<Syllabus>> {
        self.inner.read().get(&id).map(Arc::clone)
    }

    /// Metadata of every registered syllabus, keyed by id.
    pub fn list(&self) -> Vec<(Uuid, SyllabusMetadata)> {
        self.inner
            .read()
            .values()
            .map(|s| (s.id(), s.metadata().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
