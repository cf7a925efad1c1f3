//! Per-section parser, used when the block scan finds nothing.
//!
//! The text is split on looser boundaries ("Risk N:" or "Risk Category:")
//! and every field is looked up on its own, so a section with missing or
//! reordered fields still yields what it has.

use std::sync::LazyLock;

use regex::Regex;

use super::headers::{
    clean_excerpt, clean_line_value, clean_value, Field, FIELD_STOP, LINE_PREFIX,
};
use super::placeholder::is_placeholder;
use super::types::RiskCandidate;
use super::SectionError;

static SECTION_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?im){prefix}\*{{0,2}}\bRisk\s+(?:\d+|Category)\s*\*{{0,2}}\s*:[ \t]*\*{{0,2}}",
        prefix = LINE_PREFIX
    ))
    .expect("valid regex")
});

/// Canonical prefix every section is re-labeled with.
const CATEGORY_PREFIX: &str = "Risk Category:";

/// Parse every section independently. A failing section is logged and
/// skipped; the others still count.
pub fn parse_sections(text: &str) -> Vec<RiskCandidate> {
    let mut candidates = Vec::new();

    for (index, section) in SECTION_SPLIT.split(text).enumerate() {
        if section.trim().is_empty() {
            continue;
        }
        match parse_section(section) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => {
                tracing::debug!(section = index, error = %e, "Skipping fallback section");
            }
        }
    }

    candidates
}

/// Extract one candidate from a section body (text after the split marker).
///
/// Kept only if both category and score were really found; the split
/// markers alone never make a risk.
pub fn parse_section(section: &str) -> Result<RiskCandidate, SectionError> {
    let normalized = format!("{CATEGORY_PREFIX}{section}");

    let candidate = RiskCandidate {
        category: extract_field(&normalized, Field::Category),
        score: extract_field(&normalized, Field::Score),
        text: extract_field(&normalized, Field::Text),
        reason: extract_field(&normalized, Field::Reason),
        location: extract_field(&normalized, Field::Location),
    };

    if candidate.category.is_none() {
        return Err(SectionError::MissingCategory);
    }
    if candidate.score.is_none() {
        return Err(SectionError::MissingScore);
    }
    if is_placeholder(&candidate) {
        return Err(SectionError::Placeholder);
    }

    Ok(candidate)
}

/// Value of `field` in `section`, bounded by the next known header.
fn extract_field(section: &str, field: Field) -> Option<String> {
    let header = field.header().find(section)?;
    let end = FIELD_STOP
        .find_at(section, header.end())
        .map_or(section.len(), |m| m.start());
    let raw = &section[header.end()..end];

    match field {
        Field::Text => clean_excerpt(raw),
        f if f.is_multiline() => clean_value(raw),
        _ => clean_line_value(raw),
    }
}
