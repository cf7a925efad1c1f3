//! Export renderers for an [`AnalysisResult`]: a Markdown report for
//! copy/download and a JSON document for the UI.

use chrono::NaiveDate;

use super::types::{AnalysisResult, Risk};
use super::AnalysisError;
use crate::config::DEFAULT_EXPORT_TITLE;

/// Report options. The default renders the bare skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub title: String,
    /// Rendered as a metadata line under the title when set.
    pub generated_on: Option<NaiveDate>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_EXPORT_TITLE.to_string(),
            generated_on: None,
        }
    }
}

/// Render risks and mitigation points as a Markdown document.
///
/// Layout: H1 title, one H2 per risk (location, excerpt, reason), then an
/// H2 "Mitigation Summary" bullet list. Pure templating; same input, same
/// output.
pub fn format_markdown(
    risks: &[Risk],
    mitigation_points: &[String],
    options: &ExportOptions,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n", options.title));
    if let Some(date) = options.generated_on {
        out.push_str(&format!("\n_Generated on {}_\n", date.format("%Y-%m-%d")));
    }

    if risks.is_empty() {
        out.push_str("\n_No risks identified._\n");
    }
    for (i, risk) in risks.iter().enumerate() {
        out.push_str(&format!(
            "\n## Risk {}: {} ({})\n\n",
            i + 1,
            risk.category,
            risk.score
        ));
        out.push_str(&format!("**Location:** {}\n\n", risk.location));
        if !risk.text.is_empty() {
            out.push_str("**Contract Text:**\n");
            for line in risk.text.lines() {
                out.push_str(&format!("> {line}\n"));
            }
            out.push('\n');
        }
        if !risk.reason.is_empty() {
            out.push_str(&format!("**Why This Is a Risk:** {}\n", risk.reason));
        }
    }

    out.push_str("\n## Mitigation Summary\n\n");
    if mitigation_points.is_empty() {
        out.push_str("_No mitigation points extracted._\n");
    }
    for point in mitigation_points {
        out.push_str(&format!("- {point}\n"));
    }

    out
}

/// Markdown report for a complete result.
pub fn export_markdown(result: &AnalysisResult, options: &ExportOptions) -> String {
    format_markdown(&result.risks, &result.mitigation_points, options)
}

/// Pretty JSON for the UI.
pub fn export_json(result: &AnalysisResult) -> Result<String, AnalysisError> {
    Ok(serde_json::to_string_pretty(result)?)
}
