use super::patterns::NUMERIC_ID_RE;
use regex_lite::Captures;
use std::collections::HashSet;

/// Rewrites `id="N"` to `id="{section_id}-N"`. Returns the new text and how
/// many ids were touched.
pub fn namespace_ids(content: &str, section_id: &str) -> (String, usize) {
    let mut count = 0;
    let text = NUMERIC_ID_RE
        .replace_all(content, |caps: &Captures| {
            count += 1;
            format!("id=\"{}-{}\"", section_id, &caps[1])
        })
        .into_owned();
    (text, count)
}

/// Numeric ids that occur more than once, in order of their first repeat.
pub fn duplicate_ids(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for caps in NUMERIC_ID_RE.captures_iter(content) {
        let id = &caps[1];
        if !seen.insert(id.to_string()) && reported.insert(id.to_string()) {
            duplicates.push(id.to_string());
        }
    }
    duplicates
}
