use super::*;

fn assert_bounds(chunks: &[String]) {
    for chunk in chunks {
        let len = chunk.chars().count();
        assert!(
            (MIN_CHUNK_CHARS..=MAX_CHUNK_CHARS).contains(&len),
            "chunk length {} out of bounds: {:?}",
            len,
            chunk
        );
    }
}

#[test]
fn test_chunk_empty_input() {
    assert!(chunk_syllabus("").is_empty());
    assert!(chunk_syllabus("   \n\n  ").is_empty());
}

#[test]
fn test_chunk_drops_short_fragments() {
    let chunks = chunk_syllabus("Intro\nTOC\nPage 3\nSymmetric key cryptography basics");
    assert_eq!(chunks, vec!["Symmetric key cryptography basics"]);
}

#[test]
fn test_chunk_headings_are_not_emitted() {
    let raw = "Module 1\nIntroduction to network security fundamentals\nModule 2\nFirewalls and intrusion detection systems overview";
    let chunks = chunk_syllabus(raw);
    assert_eq!(
        chunks,
        vec![
            "Introduction to network security fundamentals",
            "Firewalls and intrusion detection systems overview",
        ]
    );
}

#[test]
fn test_chunk_sections_carry_module_tags() {
    let raw = "Course outline for the semester, all topics listed below\nUNIT 2\nHash functions and message authentication codes";
    let sections = chunk_sections(raw);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].module, None);
    assert_eq!(sections[1].module, Some("Unit 2".to_string()));
    assert_eq!(
        sections[1].text,
        "Hash functions and message authentication codes"
    );
}

#[test]
fn test_chunk_heading_with_separator() {
    let raw = "Chapter - 3\nAccess control models and authentication protocols";
    let sections = chunk_sections(raw);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].module, Some("Chapter 3".to_string()));
}

#[test]
fn test_chunk_splits_bullets() {
    let raw = "• Cryptographic hash functions in practice • Digital signature schemes and verification";
    let chunks = chunk_syllabus(raw);
    assert_eq!(
        chunks,
        vec![
            "Cryptographic hash functions in practice",
            "Digital signature schemes and verification",
        ]
    );
}

#[test]
fn test_chunk_bounds_hold_for_long_text() {
    let long = "network security and applied cryptography concepts ".repeat(20);
    let chunks = chunk_syllabus(&long);
    assert!(chunks.len() > 1);
    assert_bounds(&chunks);
}

#[test]
fn test_chunk_slicing_is_lossless() {
    let fragment: String = "abcdefghij".repeat(45); // 450 chars, no delimiters
    let chunks = chunk_syllabus(&fragment);
    assert_bounds(&chunks);
    assert_eq!(chunks.concat(), fragment);
}

#[test]
fn test_chunk_slicing_avoids_short_tail() {
    // 441 chars: greedy 220+220 would leave a 1-char tail.
    let fragment: String = "x".repeat(441);
    let chunks = chunk_syllabus(&fragment);
    assert_bounds(&chunks);
    assert_eq!(chunks.concat(), fragment);
}

#[test]
fn test_chunk_handles_crlf() {
    let raw = "Module 1\r\nTransport layer security handshake details\r\n";
    let sections = chunk_sections(raw);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].module, Some("Module 1".to_string()));
    assert_eq!(sections[0].text, "Transport layer security handshake details");
}

#[test]
fn test_chunk_char_safe_with_multibyte_text() {
    let raw = format!("Sécurité des réseaux — {}", "é".repeat(300));
    // Must not panic on non-ASCII boundaries.
    let chunks = chunk_syllabus(&raw);
    assert_bounds(&chunks);
}

#[test]
fn test_chunk_preserves_document_order() {
    let raw = "Unit 1\nSymmetric encryption algorithms and modes of operation\nUnit 2\nAsymmetric encryption and key exchange protocols";
    let chunks = chunk_syllabus(raw);
    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].starts_with("Symmetric"));
    assert!(chunks[1].starts_with("Asymmetric"));
}
