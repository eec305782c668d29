//! Strict parser for the 3-line adjudication reply.
//!
//! Lines are scanned case-insensitively for the `DECISION:`,
//! `JUSTIFICATION:` and `MODULE:` prefixes; extra prose, blank lines, and
//! arbitrary casing are tolerated. Every field has an explicit default, so
//! parsing always yields a usable [`Adjudication`].

use super::{Adjudication, Decision, UNKNOWN_MODULE};

/// Used when the reply carries no justification line.
pub const FALLBACK_JUSTIFICATION: &str = "No justification provided.";

/// Parses a raw model reply, applying defaults for anything missing or
/// invalid: DECISION defaults to NO, JUSTIFICATION to
/// [`FALLBACK_JUSTIFICATION`], MODULE to `"unknown"`. Later occurrences of a
/// line override earlier ones.
pub fn parse_reply(raw: &str) -> Adjudication {
    let mut decision = None;
    let mut justification = None;
    let mut module = None;

    for line in raw.lines() {
        let line = line.trim();

        if let Some(value) = field_value(line, "DECISION:") {
            decision = Some(parse_decision(value));
        } else if let Some(value) = field_value(line, "JUSTIFICATION:") {
            justification = Some(value.to_string());
        } else if let Some(value) = field_value(line, "MODULE:") {
            module = Some(value.to_string());
        }
    }

    Adjudication {
        decision: decision.unwrap_or(Decision::No),
        justification: justification
            .filter(|j| !j.is_empty())
            .unwrap_or_else(|| FALLBACK_JUSTIFICATION.to_string()),
        module: module
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_MODULE.to_string()),
    }
}

/// Returns the trimmed value after `prefix` when `line` starts with it,
/// matched case-insensitively.
fn field_value<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    if line.len() < prefix.len() || !line.is_char_boundary(prefix.len()) {
        return None;
    }

    let (head, tail) = line.split_at(prefix.len());
    head.eq_ignore_ascii_case(prefix).then(|| tail.trim())
}

/// Anything that is not exactly YES (case-insensitive) is a NO.
fn parse_decision(value: &str) -> Decision {
    if value.eq_ignore_ascii_case("yes") {
        Decision::Yes
    } else {
        Decision::No
    }
}
