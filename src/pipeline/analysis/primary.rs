//! Single forward scan for five-field risk blocks.
//!
//! A block is `Risk Category → Risk Score → Risky Contract Text →
//! Why This Is a Risk → [Contract Location]` in that order. Each value
//! runs up to the next expected header; the explanation runs up to the
//! first [`REASON_BOUNDARY`]. The cursor only moves forward, so no text
//! is consumed twice.

use super::headers::{
    clean_excerpt, clean_line_value, clean_value, find_header, Field, FIELD_STOP, REASON_BOUNDARY,
};
use super::types::RiskCandidate;

/// Every block candidate in document order, unfiltered.
pub fn scan_blocks(text: &str) -> Vec<RiskCandidate> {
    let mut candidates = Vec::new();
    let mut cursor = 0;

    while let Some(category) = find_header(text, Field::Category, cursor, text.len()) {
        match match_block(text, category.end()) {
            Some((candidate, end)) => {
                candidates.push(candidate);
                cursor = end;
            }
            // Not a complete block; resume after this header.
            None => cursor = category.end(),
        }
    }

    candidates
}

/// Match the rest of a block whose category value starts at `start`.
/// Returns the candidate and the offset just past the consumed text.
fn match_block(text: &str, start: usize) -> Option<(RiskCandidate, usize)> {
    // A block never spans into the next one.
    let limit = find_header(text, Field::Category, start, text.len())
        .map_or(text.len(), |m| m.start());

    let score = find_header(text, Field::Score, start, limit)?;
    let excerpt = find_header(text, Field::Text, score.end(), limit)?;
    let reason = find_header(text, Field::Reason, excerpt.end(), limit)?;

    let boundary = REASON_BOUNDARY.find_at(text, reason.end());
    let reason_end = boundary.map_or(text.len(), |m| m.start());

    let mut candidate = RiskCandidate {
        category: clean_line_value(&text[start..score.start()]),
        score: clean_line_value(&text[score.end()..excerpt.start()]),
        text: clean_excerpt(&text[excerpt.end()..reason.start()]),
        reason: clean_value(&text[reason.end()..reason_end]),
        location: None,
    };

    // The location is only taken when it is the boundary itself.
    let mut end = reason_end;
    if boundary.is_some() {
        let eol = end_of_line(text, reason_end);
        if let Some(location) = Field::Location.header().find_at(&text[..eol], reason_end) {
            if location.start() == reason_end {
                let value_end = location_value_end(text, location.end(), limit);
                candidate.location = clean_line_value(&text[location.end()..value_end]);
                end = value_end;
            }
        }
    }

    Some((candidate, end))
}

fn end_of_line(text: &str, from: usize) -> usize {
    text[from..].find('\n').map_or(text.len(), |i| from + i)
}

/// End of the location value: the first non-blank line after the header,
/// which may be the header's own line. Never crosses another header.
fn location_value_end(text: &str, from: usize, limit: usize) -> usize {
    let limit = limit.max(from);
    let bound = FIELD_STOP
        .find_at(&text[..limit], from)
        .map_or(limit, |m| m.start());
    let rest = &text[from..bound];
    let start = from + (rest.len() - rest.trim_start().len());
    end_of_line(&text[..bound], start)
}
