use super::*;
use std::sync::Arc;

fn sample_metadata() -> SyllabusMetadata {
    SyllabusMetadata {
        department: "CSE".to_string(),
        program: "BTech".to_string(),
        semester: "5".to_string(),
        subject_code: "CS501".to_string(),
        subject_name: "Information Security".to_string(),
    }
}

#[test]
fn test_syllabus_accessors() {
    let id = Uuid::new_v4();
    let chunks = vec![
        SyllabusChunk::new("Symmetric key cryptography and block ciphers", None),
        SyllabusChunk::new(
            "Public key infrastructure and digital certificates",
            Some("Module 2".to_string()),
        ),
    ];
    let syllabus = Syllabus::new(id, chunks.clone(), sample_metadata());

    assert_eq!(syllabus.id(), id);
    assert_eq!(syllabus.chunks(), chunks.as_slice());
    assert_eq!(syllabus.chunk_count(), 2);
    assert_eq!(syllabus.metadata().subject_code, "CS501");
}

#[test]
fn test_store_insert_and_get() {
    let store = SyllabusStore::new();
    assert!(store.is_empty());

    let id = Uuid::new_v4();
    let inserted = store.insert(Syllabus::new(id, Vec::new(), sample_metadata()));

    assert_eq!(store.len(), 1);
    let fetched = store.get(id).expect("syllabus should be registered");
    assert_eq!(fetched.id(), inserted.id());
    assert!(store.get(Uuid::new_v4()).is_none());
}

#[test]
fn test_store_only_grows() {
    let store = SyllabusStore::new();

    for i in 0..5 {
        let metadata = SyllabusMetadata {
            semester: i.to_string(),
            ..Default::default()
        };
        store.insert(Syllabus::new(Uuid::new_v4(), Vec::new(), metadata));
        assert_eq!(store.len(), i + 1);
    }

    let listed = store.list();
    assert_eq!(listed.len(), 5);
}

#[test]
fn test_store_entries_are_shared_handles() {
    let store = SyllabusStore::new();
    let id = Uuid::new_v4();
    store.insert(Syllabus::new(
        id,
        vec![SyllabusChunk::new("Network perimeter defense in depth", None)],
        SyllabusMetadata::default(),
    ));

    let a = store.get(id).unwrap();
    let b = store.get(id).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_metadata_serde_round_trip() {
    let metadata = sample_metadata();
    let json = serde_json::to_string(&metadata).unwrap();
    let back: SyllabusMetadata = serde_json::from_str(&json).unwrap();
    assert_eq!(back, metadata);
}
