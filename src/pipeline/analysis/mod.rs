pub mod types;
pub mod headers;
pub mod preprocess;
pub mod primary;
pub mod fallback;
pub mod placeholder;
pub mod location;
pub mod mitigation;
pub mod markdown;
pub mod orchestrator;


pub use types::*;
pub use preprocess::*;
pub use placeholder::*;
pub use location::*;
pub use mitigation::*;
pub use markdown::*;
pub use orchestrator::*;

use thiserror::Error;

/// Failures of the outer surfaces (config loading, export). Extraction
/// itself never returns an error.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid analysis config: {0}")]
    InvalidConfig(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a fallback section produced no risk. Logged and skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("Section has no risk category")]
    MissingCategory,

    #[error("Section has no risk score")]
    MissingScore,

    #[error("Section contains unfilled template placeholders")]
    Placeholder,
}
