use super::types::RiskCandidate;

/// Template markers the model echoes when it copies the prompt format
/// instead of filling it in.
pub const PLACEHOLDER_MARKERS: [&str; 4] = ["[Category]", "[Score]", "[Exact text]", "[Explanation]"];

/// True if `value` still carries an unfilled template marker (case-insensitive).
pub fn contains_placeholder(value: &str) -> bool {
    let lower = value.to_lowercase();
    PLACEHOLDER_MARKERS
        .iter()
        .any(|marker| lower.contains(&marker.to_lowercase()))
}

/// True if any of category, score, text or reason is template scaffolding.
pub fn is_placeholder(candidate: &RiskCandidate) -> bool {
    candidate
        .essential_fields()
        .iter()
        .any(|field| contains_placeholder(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RiskCandidate {
        RiskCandidate {
            category: Some("Indemnification".into()),
            score: Some("High".into()),
            text: Some("Contractor shall indemnify".into()),
            reason: Some("Unlimited exposure.".into()),
            location: None,
        }
    }

    #[test]
    fn filled_candidate_passes() {
        assert!(!is_placeholder(&filled()));
    }

    #[test]
    fn each_marker_rejects() {
        let mut c = filled();
        c.category = Some("[Category]".into());
        assert!(is_placeholder(&c));

        let mut c = filled();
        c.score = Some("[Score]".into());
        assert!(is_placeholder(&c));

        let mut c = filled();
        c.text = Some("\"[Exact text]\"".into());
        assert!(is_placeholder(&c));

        let mut c = filled();
        c.reason = Some("[Explanation] of the risk".into());
        assert!(is_placeholder(&c));
    }

    #[test]
    fn marker_match_ignores_case() {
        assert!(contains_placeholder("[exact TEXT]"));
    }

    #[test]
    fn location_is_not_checked() {
        let mut c = filled();
        c.location = Some("[Category] clause".into());
        assert!(!is_placeholder(&c));
    }

    #[test]
    fn ordinary_brackets_pass() {
        assert!(!contains_placeholder("Payment within [30] days"));
    }
}
