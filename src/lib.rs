pub mod config;
pub mod pipeline;

pub use config::AnalysisConfig;
pub use pipeline::analysis::{
    analyze, export_json, export_markdown, extract_mitigation_points, extract_risks,
    format_markdown, AnalysisError, AnalysisResult, ExportOptions, ExtractionPath, Risk,
    RiskAnalyzer,
};
pub use pipeline::scoring::{
    classify_score, correct_score, display_score, normalize_score, NormalizedScore, ScoreInput,
    ScoreLabel,
};

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG` (falling back to
/// [`config::default_log_filter`]). Later calls are no-ops, so hosts
/// that already own a subscriber keep theirs.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} v{} logging ready", config::APP_NAME, config::APP_VERSION);
    }
}
