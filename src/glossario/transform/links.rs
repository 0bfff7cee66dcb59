use super::patterns::{CROSS_LINK_RE, INTERNAL_LINK_RE};
use crate::model::SectionDescriptor;
use regex_lite::Captures;

/// Result of one link rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRewrite {
    pub text: String,
    pub rewritten: usize,
    /// Cross-document hrefs no section claimed. Left as they were.
    pub unresolved: Vec<String>,
}

/// Points `file.xhtml#N` anchors at `#{section}-N`.
///
/// The first section whose filename occurs in the href wins.
pub fn rewrite_cross_document_links(content: &str, sections: &[SectionDescriptor]) -> LinkRewrite {
    let mut rewritten = 0;
    let mut unresolved = Vec::new();

    let text = CROSS_LINK_RE
        .replace_all(content, |caps: &Captures| {
            let href = &caps[1];
            let label = &caps[2];
            match resolve_cross_link(href, sections) {
                Some(target) => {
                    rewritten += 1;
                    anchor(&target, label)
                }
                None => {
                    unresolved.push(href.to_string());
                    caps[0].to_string()
                }
            }
        })
        .into_owned();

    LinkRewrite {
        text,
        rewritten,
        unresolved,
    }
}

/// Points `#N` anchors at `#{section_id}-N`.
pub fn rewrite_internal_links(content: &str, section_id: &str) -> LinkRewrite {
    let mut rewritten = 0;

    let text = INTERNAL_LINK_RE
        .replace_all(content, |caps: &Captures| {
            rewritten += 1;
            anchor(&format!("{}-{}", section_id, &caps[1]), &caps[2])
        })
        .into_owned();

    LinkRewrite {
        text,
        rewritten,
        unresolved: Vec::new(),
    }
}

/// Namespaced target (`section-fragment`) for a cross-document href.
fn resolve_cross_link(href: &str, sections: &[SectionDescriptor]) -> Option<String> {
    let section = sections.iter().find(|s| href.contains(s.file.as_str()))?;
    let fragment = href.split('#').nth(1)?;
    Some(format!("{}-{}", section.id, fragment))
}

fn anchor(target: &str, label: &str) -> String {
    format!("<a href=\"#{}\">{}</a>", target, label)
}
