use std::sync::LazyLock;

use regex::Regex;

/// Explicit structural reference: "Section 4.2.1", "Article 12", "Clause 7".
static SECTION_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:Section|Article|Clause)\s+\d+(?:\.\d+)*").expect("valid regex")
});

/// True if an explicit location is missing or only says it is unknown.
pub fn needs_inference(location: Option<&str>) -> bool {
    match location {
        None => true,
        Some(loc) => loc.trim().is_empty() || loc.to_lowercase().contains("unknown"),
    }
}

/// Best-effort location for a risk. Never empty.
///
/// Returns the first section/article reference found in the excerpt,
/// verbatim, or `"<category> clause (exact section not specified)"`.
pub fn infer_location(excerpt: &str, category: &str) -> String {
    match SECTION_REF.find(excerpt) {
        Some(m) => m.as_str().to_string(),
        None => fallback_location(category),
    }
}

fn fallback_location(category: &str) -> String {
    format!("{category} clause (exact section not specified)")
}

/// Keep an explicit location, or infer one.
pub fn resolve_location(location: Option<&str>, excerpt: &str, category: &str) -> String {
    match location {
        Some(loc) if !needs_inference(Some(loc)) => loc.trim().to_string(),
        _ => infer_location(excerpt, category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_dotted_section() {
        assert_eq!(
            infer_location("As set out in Section 4.2.1, the Supplier shall", "Liability"),
            "Section 4.2.1"
        );
    }

    #[test]
    fn finds_article_verbatim() {
        assert_eq!(infer_location("per ARTICLE 12 hereof", "Termination"), "ARTICLE 12");
    }

    #[test]
    fn finds_clause_reference() {
        assert_eq!(infer_location("see Clause 7.3", "Payment"), "Clause 7.3");
    }

    #[test]
    fn trailing_period_not_captured() {
        assert_eq!(infer_location("governed by Section 9.", "Law"), "Section 9");
    }

    #[test]
    fn falls_back_to_category_clause() {
        assert_eq!(
            infer_location("Contractor shall indemnify", "Indemnification"),
            "Indemnification clause (exact section not specified)"
        );
    }

    #[test]
    fn fallback_never_empty() {
        assert!(!infer_location("", "").is_empty());
    }

    #[test]
    fn unknown_location_needs_inference() {
        assert!(needs_inference(None));
        assert!(needs_inference(Some("   ")));
        assert!(needs_inference(Some("Unknown")));
        assert!(needs_inference(Some("Location unknown")));
        assert!(!needs_inference(Some("Section 8.2")));
    }

    #[test]
    fn resolve_keeps_explicit_location() {
        assert_eq!(resolve_location(Some(" Section 8.2 "), "", "X"), "Section 8.2");
    }

    #[test]
    fn resolve_replaces_unknown_token() {
        assert_eq!(
            resolve_location(Some("UNKNOWN"), "under Article 3", "Warranty"),
            "Article 3"
        );
    }
}
