//! Shared fixtures for integration tests.
#![allow(dead_code)]

use scopegate::completion::MockCompletion;
use scopegate::embedding::StubEmbedder;
use scopegate::pipeline::{Analyzer, AnalyzerSettings};
use scopegate::syllabus::SyllabusMetadata;
use scopegate::vectordb::{ScriptedSearch, SearchHit};

/// A small security syllabus with recognizable module headings.
pub const SECURITY_SYLLABUS: &str = "\
Module 1
Introduction to information security goals and threat models
Classical ciphers, symmetric encryption and block cipher modes
Module 2
Public key cryptography, RSA and key exchange protocols
Hash functions, message authentication codes and digital signatures
Module 3
Network security, firewalls and intrusion detection systems
Transport layer security and secure communication channels
";

pub fn metadata() -> SyllabusMetadata {
    SyllabusMetadata {
        department: "CSE".to_string(),
        program: "BTech".to_string(),
        semester: "6".to_string(),
        subject_code: "CS601".to_string(),
        subject_name: "Information Security".to_string(),
    }
}

/// Analyzer over preset search hits, for deterministic gatekeeper outcomes.
pub fn scripted_analyzer(
    hits: Vec<SearchHit>,
    completion: MockCompletion,
) -> Analyzer<StubEmbedder, ScriptedSearch, MockCompletion> {
    Analyzer::new(
        StubEmbedder::with_dim(32),
        ScriptedSearch::new(hits),
        completion,
        AnalyzerSettings::default(),
    )
}

pub fn hit(distance: f32, text: &str, module: Option<&str>) -> SearchHit {
    ScriptedSearch::hit(distance, text, module)
}
