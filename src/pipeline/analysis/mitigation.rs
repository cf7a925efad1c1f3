//! Mitigation-point extraction.
//!
//! Strategies are tried in [`STRATEGIES`] order until one yields at least
//! one point. Every strategy shares the same bullet filter, dedup and cap.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::AnalysisConfig;

/// Recognised mitigation headings, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MitigationHeading {
    Summary,
    Recommendations,
    RecommendedMitigations,
    Strategies,
}

impl MitigationHeading {
    fn pattern(self) -> &'static Regex {
        &HEADING_PATTERNS[self as usize]
    }
}

/// One way of locating the mitigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MitigationStrategy {
    /// Text after a heading, up to the next risk block, line-leading
    /// bold marker, pagination artifact or end of text.
    Heading(MitigationHeading),
    /// Everything after the last literal "Mitigation".
    AfterLastMention,
}

pub const STRATEGIES: [MitigationStrategy; 5] = [
    MitigationStrategy::Heading(MitigationHeading::Summary),
    MitigationStrategy::Heading(MitigationHeading::Recommendations),
    MitigationStrategy::Heading(MitigationHeading::RecommendedMitigations),
    MitigationStrategy::Heading(MitigationHeading::Strategies),
    MitigationStrategy::AfterLastMention,
];

fn heading(label: &str) -> Regex {
    Regex::new(&format!(r"(?i)\*{{0,2}}\b{label}\s*\*{{0,2}}\s*:[ \t]*\*{{0,2}}"))
        .expect("valid regex")
}

// Indexed by `MitigationHeading as usize`.
static HEADING_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        heading(r"Mitigation\s+Summary"),
        heading(r"Mitigation\s+Recommendations"),
        heading(r"Recommended\s+Mitigations"),
        heading(r"Mitigation\s+Strategies"),
    ]
});

static SPAN_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)\bRisk\s+(?:Category|\d+)\s*\*{0,2}\s*:|^[ \t]*\*\*|\bPart\s+\d+\b")
        .expect("valid regex")
});

/// `- item`, `• item`, `* item`, `1. item`, `2) item`.
static BULLET_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-•*]|\d+[.)])\s+(.+)$").expect("valid regex")
});

const MENTION: &str = "Mitigation";

impl MitigationStrategy {
    /// The slice of `text` this strategy would read bullets from.
    pub fn span(self, text: &str) -> Option<&str> {
        match self {
            MitigationStrategy::Heading(h) => {
                let m = h.pattern().find(text)?;
                let end = SPAN_END
                    .find_at(text, m.end())
                    .map_or(text.len(), |e| e.start());
                Some(&text[m.end()..end])
            }
            MitigationStrategy::AfterLastMention => {
                text.rfind(MENTION).map(|i| &text[i + MENTION.len()..])
            }
        }
    }
}

/// Deduplicated, bounded mitigation points in first-seen order.
/// Empty when no strategy finds anything.
pub fn extract_mitigation_points(text: &str, config: &AnalysisConfig) -> Vec<String> {
    for strategy in STRATEGIES {
        let Some(span) = strategy.span(text) else {
            continue;
        };
        let points = collect_points(span, config);
        if !points.is_empty() {
            tracing::debug!(?strategy, points = points.len(), "Mitigation points extracted");
            return points;
        }
    }
    Vec::new()
}

fn collect_points(span: &str, config: &AnalysisConfig) -> Vec<String> {
    let cap = config.mitigation_cap();
    let mut seen = HashSet::new();
    let mut points = Vec::new();

    for line in span.lines() {
        if points.len() >= cap {
            break;
        }
        let Some(item) = BULLET_LINE
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim())
        else {
            continue;
        };
        if item.chars().count() <= config.min_mitigation_chars || has_markup_artifact(item) {
            continue;
        }
        if seen.insert(item.to_string()) {
            points.push(item.to_string());
        }
    }

    points
}

/// Leftover template brackets or bold markdown.
fn has_markup_artifact(item: &str) -> bool {
    item.contains('[') || item.contains(']') || item.contains("**")
}
