//! Bounded prompt construction for the adjudication call.

use std::sync::LazyLock;

use regex::Regex;

use super::AdjudicatorOptions;
use crate::gatekeeper::RetrievedChunk;

/// At most this many chunk snippets enter the prompt.
pub const MAX_PROMPT_CHUNKS: usize = 3;
/// Each snippet is truncated to this many characters.
pub const MAX_SNIPPET_CHARS: usize = 200;
/// At most this many salient topics are injected as hints.
pub const MAX_TOPIC_HINTS: usize = 15;

/// Words too generic to count as syllabus topics.
const GENERIC_WORDS: [&str; 20] = [
    "the",
    "and",
    "or",
    "of",
    "to",
    "a",
    "in",
    "on",
    "for",
    "with",
    "introduction",
    "importance",
    "overview",
    "basics",
    "concepts",
    "security",
    "system",
    "information",
    "data",
    "technology",
];

static TOPIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]{4,}").expect("topic pattern is valid"));

/// Builds the adjudication prompt: question, bounded chunk snippets, optional
/// topic hints, and the exact 3-line response contract.
pub fn build_prompt(
    question: &str,
    chunks: &[RetrievedChunk],
    options: &AdjudicatorOptions,
) -> String {
    let snippets = chunks
        .iter()
        .take(MAX_PROMPT_CHUNKS)
        .map(|chunk| format!("- {}", snippet(&chunk.text)))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = format!(
        "You are a university syllabus validator.\n\
         \n\
         Question:\n\
         {question}\n\
         \n\
         Syllabus content:\n\
         {snippets}\n"
    );

    if options.topic_hints {
        let topics = salient_topics(chunks);
        let topic_list = if topics.is_empty() {
            "NONE".to_string()
        } else {
            topics
                .into_iter()
                .take(MAX_TOPIC_HINTS)
                .collect::<Vec<_>>()
                .join(", ")
        };
        prompt.push_str(&format!("\nSyllabus topics:\n{topic_list}\n"));
    }

    prompt.push_str(
        "\nAnswer STRICTLY in this format:\n\
         \n\
         DECISION: YES or NO\n\
         JUSTIFICATION: one short sentence\n\
         MODULE: module name or unknown\n\
         \n\
         Rules:\n\
         - YES only if the syllabus supports answering this question.\n\
         - NO if it goes beyond syllabus scope.\n",
    );

    prompt
}

/// Flattens a chunk to a single line of at most [`MAX_SNIPPET_CHARS`] chars.
fn snippet(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    flat.chars().take(MAX_SNIPPET_CHARS).collect()
}

/// Deduplicated alphabetic tokens (>= 4 chars, minus generic words) across
/// all chunks, in first-seen order.
pub fn salient_topics(chunks: &[RetrievedChunk]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut topics = Vec::new();

    for chunk in chunks {
        let lower = chunk.text.to_lowercase();
        for m in TOPIC_RE.find_iter(&lower) {
            let word = m.as_str();
            if GENERIC_WORDS.contains(&word) {
                continue;
            }
            if seen.insert(word.to_string()) {
                topics.push(word.to_string());
            }
        }
    }

    topics
}
