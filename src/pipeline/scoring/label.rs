use std::fmt;

use serde::{Deserialize, Serialize};

/// Human label for a (repaired) numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Good,
    Medium,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl ScoreLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Good => "Good",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Band a repaired score. Bounds are exclusive: exactly 80 is "Good".
pub fn classify_score(value: f64) -> ScoreLabel {
    if value > 100.0 {
        ScoreLabel::VeryHigh
    } else if value > 80.0 {
        ScoreLabel::High
    } else if value > 60.0 {
        ScoreLabel::Good
    } else if value > 40.0 {
        ScoreLabel::Medium
    } else if value > 20.0 {
        ScoreLabel::Low
    } else {
        ScoreLabel::VeryLow
    }
}
