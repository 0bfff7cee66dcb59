use super::patterns::BODY_RE;

/// Returns the trimmed markup between the body tags, or an empty string when
/// the document has no body region.
pub fn extract_body(document: &str) -> &str {
    BODY_RE
        .captures(document)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or("")
}
