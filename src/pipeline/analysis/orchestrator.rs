use super::fallback::parse_sections;
use super::location::resolve_location;
use super::mitigation::extract_mitigation_points;
use super::placeholder::is_placeholder;
use super::preprocess::{preprocess, strip_scaffolding};
use super::primary::scan_blocks;
use super::types::{AnalysisResult, ExtractionPath, Risk, RiskCandidate};
use crate::config::AnalysisConfig;

/// Runs the full extraction pipeline over one model response.
///
/// Holds configuration only; every call builds its own scan state, so one
/// analyzer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RiskAnalyzer {
    config: AnalysisConfig,
}

impl RiskAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Risks and mitigation points from raw model text. Never fails; an
    /// empty result is a valid outcome.
    pub fn analyze(&self, raw: &str) -> AnalysisResult {
        let (risks, extraction_path) = self.extract_risks_with_path(raw);
        // Reasoning blocks are dropped here too; line filtering is risk-only.
        let mitigation_text = if self.config.strip_boilerplate {
            strip_scaffolding(raw)
        } else {
            raw.to_string()
        };
        let mitigation_points = extract_mitigation_points(&mitigation_text, &self.config);

        tracing::info!(
            risks = risks.len(),
            mitigation_points = mitigation_points.len(),
            path = ?extraction_path,
            "Contract analysis extracted"
        );

        AnalysisResult {
            risks,
            mitigation_points,
            extraction_path,
        }
    }

    /// Risks only, in document order.
    pub fn extract_risks(&self, raw: &str) -> Vec<Risk> {
        self.extract_risks_with_path(raw).0
    }

    fn extract_risks_with_path(&self, raw: &str) -> (Vec<Risk>, ExtractionPath) {
        let text = if self.config.strip_boilerplate {
            preprocess(raw).text
        } else {
            raw.to_string()
        };

        let primary = accept_all(scan_blocks(&text));
        if !primary.is_empty() {
            return (primary, ExtractionPath::Primary);
        }

        tracing::debug!("No complete risk blocks found, trying section parser");
        let fallback = accept_all(parse_sections(&text));
        if !fallback.is_empty() {
            return (fallback, ExtractionPath::Fallback);
        }

        (Vec::new(), ExtractionPath::None)
    }
}

/// Risks and mitigation points with the default configuration.
pub fn analyze(raw: &str) -> AnalysisResult {
    RiskAnalyzer::default().analyze(raw)
}

/// Risks with the default configuration.
pub fn extract_risks(raw: &str) -> Vec<Risk> {
    RiskAnalyzer::default().extract_risks(raw)
}

fn accept_all(candidates: Vec<RiskCandidate>) -> Vec<Risk> {
    candidates.into_iter().filter_map(accept).collect()
}

/// Turn a candidate into a [`Risk`], or drop it when category or score is
/// missing or any essential field is template scaffolding.
pub fn accept(candidate: RiskCandidate) -> Option<Risk> {
    if is_placeholder(&candidate) {
        tracing::debug!("Dropping placeholder risk block");
        return None;
    }

    let RiskCandidate {
        category,
        score,
        text,
        reason,
        location,
    } = candidate;
    let category = category?;
    let score = score?;
    let text = text.unwrap_or_default();
    let location = resolve_location(location.as_deref(), &text, &category);

    Some(Risk {
        category,
        score,
        text,
        reason: reason.unwrap_or_default(),
        location,
    })
}
