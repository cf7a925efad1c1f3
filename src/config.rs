use serde::{Deserialize, Serialize};

use crate::pipeline::analysis::AnalysisError;

/// Application-level constants
pub const APP_NAME: &str = "ClauseGuard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on mitigation points returned per analysis.
pub const MAX_MITIGATION_POINTS: usize = 10;

/// A bullet must be longer than this (after removing the bullet glyph)
/// to count as a mitigation point.
pub const MIN_MITIGATION_CHARS: usize = 10;

/// H1 title of the exported Markdown report.
pub const DEFAULT_EXPORT_TITLE: &str = "Contract Risk Analysis";

/// Default `EnvFilter` directive when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "clauseguard_lib=info,warn"
}

/// Tunables for one analysis run. Every field has a default, so a host
/// can pass a partial JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Upper bound on extracted mitigation points. Values above
    /// [`MAX_MITIGATION_POINTS`] are clamped.
    pub max_mitigation_points: usize,
    /// Minimum bullet length (exclusive) for a mitigation point.
    pub min_mitigation_chars: usize,
    /// Run the boilerplate stripper before risk extraction.
    pub strip_boilerplate: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_mitigation_points: MAX_MITIGATION_POINTS,
            min_mitigation_chars: MIN_MITIGATION_CHARS,
            strip_boilerplate: true,
        }
    }
}

impl AnalysisConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AnalysisError::InvalidConfig(e.to_string()))?;
        Ok(config)
    }

    /// Effective mitigation cap, never above [`MAX_MITIGATION_POINTS`].
    pub fn mitigation_cap(&self) -> usize {
        self.max_mitigation_points.min(MAX_MITIGATION_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_clauseguard() {
        assert_eq!(APP_NAME, "ClauseGuard");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_config_uses_crate_limits() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_mitigation_points, 10);
        assert_eq!(config.min_mitigation_chars, 10);
        assert!(config.strip_boilerplate);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = AnalysisConfig::from_json(r#"{"strip_boilerplate": false}"#).unwrap();
        assert!(!config.strip_boilerplate);
        assert_eq!(config.max_mitigation_points, MAX_MITIGATION_POINTS);
    }

    #[test]
    fn invalid_json_is_config_error() {
        let result = AnalysisConfig::from_json("{not json");
        assert!(matches!(result, Err(AnalysisError::InvalidConfig(_))));
    }

    #[test]
    fn mitigation_cap_is_clamped() {
        let config = AnalysisConfig {
            max_mitigation_points: 50,
            ..AnalysisConfig::default()
        };
        assert_eq!(config.mitigation_cap(), MAX_MITIGATION_POINTS);

        let config = AnalysisConfig {
            max_mitigation_points: 3,
            ..AnalysisConfig::default()
        };
        assert_eq!(config.mitigation_cap(), 3);
    }
}
