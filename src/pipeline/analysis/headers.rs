//! Field-header vocabulary shared by both risk extractors.
//!
//! Headers match case-insensitively and tolerate the markdown the model
//! wraps them in: `Risk Category:`, `**Risk Category:**` and
//! `**Risk Category**:` are the same header.

use std::sync::LazyLock;

use regex::{Match, Regex};

/// The five labeled fields of a risk block, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Category,
    Score,
    Text,
    Reason,
    Location,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Category,
        Field::Score,
        Field::Text,
        Field::Reason,
        Field::Location,
    ];

    /// Compiled header pattern for this field.
    pub fn header(self) -> &'static Regex {
        match self {
            Field::Category => &CATEGORY_HEADER,
            Field::Score => &SCORE_HEADER,
            Field::Text => &TEXT_HEADER,
            Field::Reason => &REASON_HEADER,
            Field::Location => &LOCATION_HEADER,
        }
    }

    /// Text and reason may span several lines; the others are one-liners.
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Text | Field::Reason)
    }
}

/// Optional list or heading marker in front of a header at line start:
/// `- `, `• `, `* `, `1. `, `2) `, `### `. Part of the match, so a value
/// never picks up the marker of the line after it.
pub const LINE_PREFIX: &str = r"(?:^[ \t]*(?:[-•*]|\d+[.)]|#{1,6})[ \t]*)?";

fn header(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?im){prefix}\*{{0,2}}\b{label}\s*\*{{0,2}}\s*:[ \t]*\*{{0,2}}",
        prefix = LINE_PREFIX
    ))
    .expect("valid regex")
}

static CATEGORY_HEADER: LazyLock<Regex> = LazyLock::new(|| header(r"Risk\s+Category"));
static SCORE_HEADER: LazyLock<Regex> = LazyLock::new(|| header(r"Risk\s+Score"));
static TEXT_HEADER: LazyLock<Regex> = LazyLock::new(|| header(r"Risky\s+Contract\s+Text"));
static REASON_HEADER: LazyLock<Regex> = LazyLock::new(|| header(r"Why\s+This\s+Is\s+a\s+Risk"));
static LOCATION_HEADER: LazyLock<Regex> = LazyLock::new(|| header(r"Contract\s+Location"));

/// Where an explanation ends, in priority order at equal offsets:
/// a location header, a new block, the mitigation summary, a markdown
/// heading line, a bold marker, a "Part N" pagination artifact.
pub static REASON_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?im){p}\*{{0,2}}\bContract\s+Location\s*\*{{0,2}}\s*:|{p}\*{{0,2}}\bRisk\s+Category\s*\*{{0,2}}\s*:|{p}\*{{0,2}}\bMitigation\s+Summary\b|^[ \t]*#{{1,6}}[ \t]|\*\*|\bPart\s+\d+\b",
        p = LINE_PREFIX
    ))
    .expect("valid regex")
});

/// Any known header, heading line or pagination artifact. Bounds single
/// fields in the section parser.
pub static FIELD_STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?im){p}\*{{0,2}}\b(?:Risk\s+Category|Risk\s+Score|Risky\s+Contract\s+Text|Why\s+This\s+Is\s+a\s+Risk|Contract\s+Location|Mitigation\s+Summary|Mitigation\s+Recommendations|Recommended\s+Mitigations|Mitigation\s+Strategies)\s*\*{{0,2}}\s*:|^[ \t]*#{{1,6}}[ \t]|\bPart\s+\d+\b",
        p = LINE_PREFIX
    ))
    .expect("valid regex")
});

/// Find `field`'s header in `text[from..limit]`.
pub fn find_header(text: &str, field: Field, from: usize, limit: usize) -> Option<Match<'_>> {
    if from > limit {
        return None;
    }
    field.header().find_at(&text[..limit], from)
}

/// Trim whitespace and stray bold/heading markers. `None` if nothing is left.
pub fn clean_value(raw: &str) -> Option<String> {
    let cleaned = raw.trim_matches(|c: char| c.is_whitespace() || c == '*' || c == '#');
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Clean a one-line field: only the first non-empty line counts.
pub fn clean_line_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '*');
    trimmed.lines().next().and_then(clean_value)
}

/// Clean an excerpt and drop one pair of surrounding quotes.
pub fn clean_excerpt(raw: &str) -> Option<String> {
    let cleaned = clean_value(raw)?;
    let unquoted = strip_quotes(&cleaned).trim();
    if unquoted.is_empty() {
        None
    } else {
        Some(unquoted.to_string())
    }
}

fn strip_quotes(s: &str) -> &str {
    const PAIRS: [(char, char); 3] = [('"', '"'), ('\u{201C}', '\u{201D}'), ('\'', '\'')];
    for (open, close) in PAIRS {
        if let Some(inner) = s.strip_prefix(open).and_then(|rest| rest.strip_suffix(close)) {
            return inner;
        }
    }
    // An unbalanced double quote is still a quote; a lone apostrophe is not.
    s.trim_start_matches(['"', '\u{201C}'])
        .trim_end_matches(['"', '\u{201D}'])
}
