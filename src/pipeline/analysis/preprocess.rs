// Strip scaffolding the model echoes around its analysis before the
// extractors see it: reasoning blocks, role prefaces, section banners.

use std::sync::LazyLock;

use regex::Regex;

use super::headers::Field;

/// Text ready for extraction plus what was removed (for logging only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessedText {
    pub text: String,
    pub removed_lines: usize,
}

/// `<think>...</think>` reasoning blocks, including unclosed trailing ones.
static THINK_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<think(?:ing)?>.*?(?:</think(?:ing)?>|\z)").expect("valid regex")
});

/// Stray tokenizer artifacts like `<unused12>`.
static UNUSED_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<unused\d+>").expect("valid regex"));

/// Chat-role marker at line start; the rest of the line is kept.
static ROLE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:system|assistant|user|ai)\s*:\s*").expect("valid regex")
});

/// Whole lines of model chatter that carry no analysis content.
static PREFACE_LINES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^(?:sure|certainly|of course|absolutely|okay)\b[,!.]?.*\b(?:here|below)\b.*$",
        r"(?i)^as an ai(?: language model)?\b.*$",
        r"(?i)^(?:here\s+is|here's|below\s+is)\s+(?:the|my|a|an)\b.*\banalysis\b.*:?\s*$",
        r"(?i)^i\s+(?:have|'ve)\s+(?:analy[sz]ed|reviewed)\s+the\s+(?:contract|agreement|document)\b.*$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Decorative banners: rules and the generic report title.
static BANNER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[=\-_~]{3,}|#{1,6}\s*(?:contract\s+)?risk\s+(?:analysis|assessment)(?:\s+report)?\s*:?|[=\-]+\s*(?:contract\s+)?risk\s+(?:analysis|assessment)\s*[=\-]+)$",
    )
    .expect("valid regex")
});

/// Normalize line endings and drop reasoning blocks and tokenizer
/// artifacts. Lines are otherwise left alone.
pub fn strip_scaffolding(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let no_thinking = THINK_BLOCK.replace_all(&unified, "");
    UNUSED_TOKEN.replace_all(&no_thinking, "").into_owned()
}

/// Clean raw model output for extraction. Never fails; text with no
/// scaffolding comes back with only line endings normalized.
///
/// Preface chatter is only recognized before the first field header;
/// after that a line like "Certainly ... here" is analysis content.
pub fn preprocess(raw: &str) -> PreprocessedText {
    let stripped = strip_scaffolding(raw);

    let mut kept: Vec<String> = Vec::new();
    let mut removed_lines = 0usize;
    let mut in_body = false;

    for line in stripped.lines() {
        let without_role = ROLE_MARKER.replace(line, "");
        let trimmed = without_role.trim();

        in_body = in_body || is_field_header(trimmed);
        if (!in_body && is_preface(trimmed)) || BANNER_LINE.is_match(trimmed) {
            removed_lines += 1;
            continue;
        }
        kept.push(without_role.into_owned());
    }

    if removed_lines > 0 {
        tracing::debug!(removed_lines, "Boilerplate stripped from analysis text");
    }

    PreprocessedText {
        text: kept.join("\n").trim().to_string(),
        removed_lines,
    }
}

fn is_preface(trimmed: &str) -> bool {
    PREFACE_LINES.iter().any(|re| re.is_match(trimmed))
}

fn is_field_header(trimmed: &str) -> bool {
    Field::ALL.iter().any(|f| f.header().is_match(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefaces_and_banners() {
        let raw = "Sure! Here is the contract risk analysis you asked for.\n\
            ===========\n\
            ### Contract Risk Analysis\n\
            Risk Category: Indemnification\n\
            Risk Score: High";
        let out = preprocess(raw);
        assert_eq!(out.text, "Risk Category: Indemnification\nRisk Score: High");
        assert_eq!(out.removed_lines, 3);
    }

    #[test]
    fn strips_role_marker_but_keeps_content() {
        let out = preprocess("assistant: Risk Category: Payment");
        assert_eq!(out.text, "Risk Category: Payment");
        assert_eq!(out.removed_lines, 0);
    }

    #[test]
    fn strips_think_block() {
        let raw = "<think>Let me read the contract carefully.\nOk.</think>\nRisk Category: IP";
        assert_eq!(preprocess(raw).text, "Risk Category: IP");
    }

    #[test]
    fn strips_unclosed_think_block() {
        let raw = "Risk Category: IP\n<think>never finished";
        assert_eq!(preprocess(raw).text, "Risk Category: IP");
    }

    #[test]
    fn strips_unused_tokens() {
        assert_eq!(preprocess("Risk <unused3>Score: High").text, "Risk Score: High");
    }

    #[test]
    fn normalizes_crlf() {
        assert_eq!(preprocess("a\r\nb\rc").text, "a\nb\nc");
    }

    #[test]
    fn as_an_ai_disclaimer_removed() {
        let out = preprocess("As an AI language model, I cannot give legal advice.\nRisk Score: Low");
        assert_eq!(out.text, "Risk Score: Low");
    }

    #[test]
    fn markdown_bold_headers_survive() {
        let raw = "**Risk Category:** Liability\n- Bullet stays\n**Mitigation Summary:**";
        assert_eq!(preprocess(raw).text, raw);
    }

    #[test]
    fn ordinary_sentences_survive() {
        let raw = "Here the supplier bears all risk.\nOkay terms overall.";
        assert_eq!(preprocess(raw).text, raw);
    }

    #[test]
    fn preface_words_inside_a_reason_survive() {
        let raw = "Sure, here is the analysis.\n\
            Risk Category: Termination\n\
            Why This Is a Risk: The supplier may exit.\n\
            Certainly the customer is exposed here for months.";
        let out = preprocess(raw);
        let reason = "The supplier may exit.\nCertainly the customer is exposed here for months.";
        assert_eq!(out.removed_lines, 1);
        assert!(out.text.ends_with(reason));
    }

    #[test]
    fn banner_before_preface_does_not_end_preamble() {
        let raw = "### Contract Risk Analysis\n\
            Certainly, here is my review.\n\
            Risk Category: IP";
        let out = preprocess(raw);
        assert_eq!(out.text, "Risk Category: IP");
        assert_eq!(out.removed_lines, 2);
    }

    #[test]
    fn scaffolding_strip_keeps_lines() {
        let raw = "Sure, here it is.\r\n<think>draft</think>Mitigation Summary:<unused7>";
        assert_eq!(strip_scaffolding(raw), "Sure, here it is.\nMitigation Summary:");
    }

    #[test]
    fn empty_input() {
        let out = preprocess("");
        assert_eq!(out.text, "");
        assert_eq!(out.removed_lines, 0);
    }
}
