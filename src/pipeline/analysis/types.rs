use serde::{Deserialize, Serialize};

/// One identified contractual risk, as handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    /// Free-text classification, e.g. "Indemnification".
    pub category: String,
    /// Severity label as written by the model ("Critical", "High", ...).
    pub score: String,
    /// Quoted contract excerpt. Empty when the model gave none.
    pub text: String,
    /// Why the excerpt is risky. Empty when the model gave none.
    pub reason: String,
    /// Section/article reference or the inferred fallback string.
    pub location: String,
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub risks: Vec<Risk>,
    pub mitigation_points: Vec<String>,
    pub extraction_path: ExtractionPath,
}

/// Which extractor produced the risks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionPath {
    /// The five-field block scan matched at least one risk.
    Primary,
    /// The block scan found nothing; per-section parsing did.
    Fallback,
    /// Neither pass produced a risk.
    None,
}

/// A risk as captured from text, before acceptance.
///
/// Absent fields stay `None` instead of carrying "Unknown ..." strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskCandidate {
    pub category: Option<String>,
    pub score: Option<String>,
    pub text: Option<String>,
    pub reason: Option<String>,
    pub location: Option<String>,
}

impl RiskCandidate {
    /// The four fields checked for template markers. Absent fields read as "".
    pub fn essential_fields(&self) -> [&str; 4] {
        [
            self.category.as_deref().unwrap_or(""),
            self.score.as_deref().unwrap_or(""),
            self.text.as_deref().unwrap_or(""),
            self.reason.as_deref().unwrap_or(""),
        ]
    }
}
