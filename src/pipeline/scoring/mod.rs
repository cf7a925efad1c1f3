pub mod label;
pub mod normalize;

pub use label::*;
pub use normalize::*;

use thiserror::Error;

/// Why a score input could not be read as a number. Never surfaces past
/// [`display_score`] / [`correct_score`], which map it to `N/A` / `0`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("No score value")]
    Missing,

    #[error("Score is not numeric: {0:?}")]
    NotNumeric(String),

    #[error("Score is not a finite number")]
    NotFinite,
}
