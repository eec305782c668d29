//! Syllabus chunking into bounded, retrieval-ready fragments.
//!
//! Sections are delimited by `Module/Unit/Chapter <n>` headings (matched
//! case-insensitively); the heading text becomes the module tag of the
//! section's chunks rather than a chunk of its own. Fragments shorter than
//! [`MIN_CHUNK_CHARS`] are dropped as heading/TOC noise; longer fragments are
//! sliced into pieces of at most [`MAX_CHUNK_CHARS`] characters without
//! losing any characters of the retained text.

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use regex::Regex;

use crate::syllabus::SyllabusChunk;

/// Fragments below this many characters are discarded as noise.
pub const MIN_CHUNK_CHARS: usize = 20;
/// No emitted chunk exceeds this many characters.
pub const MAX_CHUNK_CHARS: usize = 220;

/// Section heading: keyword + optional separator + number.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(module|unit|chapter)\s*[:.\-]?\s*(\d+)").expect("heading pattern is valid")
});

/// Characters treated as bullet delimiters within a line.
const BULLET_DELIMITERS: [char; 4] = ['•', '·', '-', '–'];

/// Chunks syllabus text into bounded plain strings (module tags discarded).
pub fn chunk_syllabus(raw: &str) -> Vec<String> {
    chunk_sections(raw).into_iter().map(|c| c.text).collect()
}

/// Chunks syllabus text, tagging each chunk with its section heading.
pub fn chunk_sections(raw: &str) -> Vec<SyllabusChunk> {
    let text = raw.replace("\r\n", "\n").replace('\r', "\n");

    let headings: Vec<(usize, usize, String)> = HEADING_RE
        .captures_iter(&text)
        .map(|caps| {
            let m = caps.get(0).expect("whole match always present");
            let keyword = caps.get(1).expect("keyword group").as_str();
            let number = caps.get(2).expect("number group").as_str();
            (m.start(), m.end(), normalize_heading(keyword, number))
        })
        .collect();

    let mut chunks = Vec::new();

    if headings.is_empty() {
        chunk_section(&text, None, &mut chunks);
        return chunks;
    }

    // Text before the first heading belongs to no module.
    chunk_section(&text[..headings[0].0], None, &mut chunks);

    for (i, (_, end, tag)) in headings.iter().enumerate() {
        let section_end = headings.get(i + 1).map(|h| h.0).unwrap_or(text.len());
        chunk_section(&text[*end..section_end], Some(tag.as_str()), &mut chunks);
    }

    chunks
}

/// `"unit"`, `"3"` → `"Unit 3"`.
fn normalize_heading(keyword: &str, number: &str) -> String {
    let mut chars = keyword.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    };
    format!("{} {}", capitalized, number)
}

fn chunk_section(section: &str, module: Option<&str>, out: &mut Vec<SyllabusChunk>) {
    for line in section.lines() {
        for fragment in line.split(|c: char| BULLET_DELIMITERS.contains(&c)) {
            let fragment = fragment.trim();
            if fragment.chars().count() < MIN_CHUNK_CHARS {
                continue;
            }
            for piece in slice_bounded(fragment) {
                out.push(SyllabusChunk::new(piece, module.map(ToOwned::to_owned)));
            }
        }
    }
}

/// Splits a retained fragment into consecutive pieces of at most
/// [`MAX_CHUNK_CHARS`] characters, reproducing every character exactly.
///
/// A greedy 220-char cut that would strand a tail shorter than
/// [`MIN_CHUNK_CHARS`] is shortened so the tail stays within bounds.
fn slice_bounded(fragment: &str) -> Vec<String> {
    let chars: Vec<char> = fragment.chars().collect();
    let mut pieces = Vec::new();
    let mut start = 0;

    while chars.len() - start > MAX_CHUNK_CHARS {
        let remaining = chars.len() - start;
        let take = if remaining - MAX_CHUNK_CHARS < MIN_CHUNK_CHARS {
            remaining - MIN_CHUNK_CHARS
        } else {
            MAX_CHUNK_CHARS
        };
        pieces.push(chars[start..start + take].iter().collect());
        start += take;
    }

    pieces.push(chars[start..].iter().collect());
    pieces
}
