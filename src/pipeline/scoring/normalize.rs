//! Numeric score repair and display.
//!
//! Some upstream scores arrive with the decimal point dropped (`11084`
//! for `110.84`). The repair only fires when re-inserting the point
//! after the third digit lands in a plausible range, so genuinely large
//! values are left alone.

use serde::{Deserialize, Serialize};

use super::label::{classify_score, ScoreLabel};
use super::ScoreError;

/// Constants of the decimal-point repair heuristic. Empirical; keep as is.
pub mod correction_thresholds {
    /// Only values above this are suspected of a lost decimal point.
    pub const SUSPECT_ABOVE: f64 = 1000.0;

    /// Minimum digit count of the integer part for a repair attempt.
    pub const MIN_DIGITS: usize = 5;

    /// The decimal point is re-inserted after this many leading digits.
    pub const KEPT_DIGITS: usize = 3;

    /// A repaired value must be below this to be believed.
    pub const PLAUSIBLE_MAX: f64 = 200.0;

    /// A repaired value replaces the original only below this. Never
    /// binding today: `PLAUSIBLE_MAX` already caps repairs below 200.
    pub const ACCEPT_MAX: f64 = 1000.0;
}

/// Display bands below the repair threshold.
pub mod display_bands {
    /// Above this (up to the repair threshold) the display is "High".
    pub const HIGH_ABOVE: f64 = 100.0;

    /// From this up to `HIGH_ABOVE` the value already is a percentage.
    pub const PERCENT_FROM: f64 = 1.0;

    /// Positive values below this show as "<0.1%".
    pub const TINY_BELOW: f64 = 0.001;
}

/// Shown for anything that is not a usable number.
pub const NOT_AVAILABLE: &str = "N/A";

/// A score as it reaches the normalizer: number, numeric string, or nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScoreInput {
    Missing,
    Number(f64),
    Text(String),
}

impl From<f64> for ScoreInput {
    fn from(v: f64) -> Self {
        ScoreInput::Number(v)
    }
}

impl From<f32> for ScoreInput {
    fn from(v: f32) -> Self {
        ScoreInput::Number(f64::from(v))
    }
}

impl From<i32> for ScoreInput {
    fn from(v: i32) -> Self {
        ScoreInput::Number(f64::from(v))
    }
}

impl From<u32> for ScoreInput {
    fn from(v: u32) -> Self {
        ScoreInput::Number(f64::from(v))
    }
}

impl From<i64> for ScoreInput {
    fn from(v: i64) -> Self {
        ScoreInput::Number(v as f64)
    }
}

impl From<&str> for ScoreInput {
    fn from(v: &str) -> Self {
        ScoreInput::Text(v.to_string())
    }
}

impl From<String> for ScoreInput {
    fn from(v: String) -> Self {
        ScoreInput::Text(v)
    }
}

impl<T: Into<ScoreInput>> From<Option<T>> for ScoreInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(ScoreInput::Missing, Into::into)
    }
}

impl ScoreInput {
    /// Coerce to a finite number.
    pub fn to_number(&self) -> Result<f64, ScoreError> {
        let value = match self {
            ScoreInput::Missing => return Err(ScoreError::Missing),
            ScoreInput::Number(v) => *v,
            ScoreInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| ScoreError::NotNumeric(s.clone()))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ScoreError::NotFinite)
        }
    }
}

/// Display string, repaired value and label together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedScore {
    pub value: f64,
    pub display: String,
    pub label: ScoreLabel,
}

/// Normalize any score input. Invalid input gives `N/A`, `0`, "Very Low".
pub fn normalize_score(input: impl Into<ScoreInput>) -> NormalizedScore {
    let input = input.into();
    let value = correct_score(input.clone());
    NormalizedScore {
        value,
        display: display_score(input),
        label: classify_score(value),
    }
}

/// Human-readable percentage or band. Always a defined string.
pub fn display_score(input: impl Into<ScoreInput>) -> String {
    match input.into().to_number() {
        Ok(value) => display_value(value),
        Err(e) => {
            tracing::trace!(error = %e, "Score not displayable");
            NOT_AVAILABLE.to_string()
        }
    }
}

/// Repaired numeric value; `0` for invalid input. Idempotent.
pub fn correct_score(input: impl Into<ScoreInput>) -> f64 {
    match input.into().to_number() {
        Ok(value) => correct_value(value),
        Err(_) => 0.0,
    }
}

fn correct_value(value: f64) -> f64 {
    match decimal_repair(value) {
        Some(repaired) if repaired > 0.0 && repaired < correction_thresholds::ACCEPT_MAX => {
            repaired
        }
        _ => value,
    }
}

fn display_value(value: f64) -> String {
    use display_bands::*;

    if value > correction_thresholds::SUSPECT_ABOVE {
        return match decimal_repair(value) {
            Some(repaired) if repaired > HIGH_ABOVE => "High".to_string(),
            Some(repaired) => format!("{repaired:.1}%"),
            None => "Very High".to_string(),
        };
    }
    if value > HIGH_ABOVE {
        return "High".to_string();
    }
    if value >= PERCENT_FROM {
        return whole_percent(value);
    }
    if value == 0.0 {
        return "0%".to_string();
    }
    if value > 0.0 && value < TINY_BELOW {
        return "<0.1%".to_string();
    }
    format!("{:.1}%", value * 100.0)
}

/// One decimal, with a trailing `.0` dropped: `42%`, `42.5%`.
fn whole_percent(value: f64) -> String {
    let fixed = format!("{value:.1}");
    let trimmed = fixed.strip_suffix(".0").unwrap_or(&fixed);
    format!("{trimmed}%")
}

/// The value with a decimal point re-inserted after the leading digits,
/// if the input looks corrupted and the result is plausible.
fn decimal_repair(value: f64) -> Option<f64> {
    use correction_thresholds::*;

    if value <= SUSPECT_ABOVE {
        return None;
    }
    let digits = format!("{}", value.trunc());
    if digits.len() < MIN_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let repaired: f64 = format!("{}.{}", &digits[..KEPT_DIGITS], &digits[KEPT_DIGITS..])
        .parse()
        .ok()?;
    if repaired > 0.0 && repaired < PLAUSIBLE_MAX {
        Some(repaired)
    } else {
        None
    }
}
