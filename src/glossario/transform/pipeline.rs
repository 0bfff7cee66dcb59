use super::ids::namespace_ids;
use super::links::{rewrite_cross_document_links, rewrite_internal_links};
use crate::model::SectionDescriptor;
use std::fmt;

/// A single named rewrite over section markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CrossDocumentLinks,
    InternalLinks,
    NamespaceIds,
}

/// What a stage needs to know about where the markup is going.
#[derive(Debug, Clone, Copy)]
pub struct StageContext<'a> {
    pub section: &'a SectionDescriptor,
    pub sections: &'a [SectionDescriptor],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    pub text: String,
    pub rewritten: usize,
    pub unresolved: Vec<String>,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::CrossDocumentLinks => "cross-document-links",
            Stage::InternalLinks => "internal-links",
            Stage::NamespaceIds => "namespace-ids",
        }
    }

    pub fn apply(&self, content: &str, ctx: &StageContext) -> StageOutput {
        match self {
            Stage::CrossDocumentLinks => {
                let out = rewrite_cross_document_links(content, ctx.sections);
                StageOutput {
                    text: out.text,
                    rewritten: out.rewritten,
                    unresolved: out.unresolved,
                }
            }
            Stage::InternalLinks => {
                let out = rewrite_internal_links(content, &ctx.section.id);
                StageOutput {
                    text: out.text,
                    rewritten: out.rewritten,
                    unresolved: out.unresolved,
                }
            }
            Stage::NamespaceIds => {
                let (text, rewritten) = namespace_ids(content, &ctx.section.id);
                StageOutput {
                    text,
                    rewritten,
                    unresolved: Vec::new(),
                }
            }
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-order rewrite pipeline.
///
/// Cross-document links must be rewritten before internal ones: once an
/// `other.xhtml#N` anchor has become `#{section}-N` the internal pattern (digits
/// only) no longer matches it. Id namespacing comes last so links and targets
/// agree on the prefix.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: [Stage; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub text: String,
    pub counts: Vec<(Stage, usize)>,
    pub unresolved: Vec<String>,
}

impl PipelineOutput {
    pub fn count(&self, stage: Stage) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

impl Pipeline {
    pub fn standard() -> Self {
        Self {
            stages: [
                Stage::CrossDocumentLinks,
                Stage::InternalLinks,
                Stage::NamespaceIds,
            ],
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn run(&self, content: &str, ctx: &StageContext) -> PipelineOutput {
        let mut text = content.to_string();
        let mut counts = Vec::with_capacity(self.stages.len());
        let mut unresolved = Vec::new();

        for stage in &self.stages {
            let out = stage.apply(&text, ctx);
            counts.push((*stage, out.rewritten));
            unresolved.extend(out.unresolved);
            text = out.text;
        }

        PipelineOutput {
            text,
            counts,
            unresolved,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_sections;

    fn run_for(id: &str, content: &str) -> PipelineOutput {
        let sections = default_sections();
        let section = sections.iter().find(|s| s.id == id).unwrap();
        let ctx = StageContext {
            section,
            sections: &sections,
        };
        Pipeline::standard().run(content, &ctx)
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(
            Pipeline::standard().stages(),
            &[
                Stage::CrossDocumentLinks,
                Stage::InternalLinks,
                Stage::NamespaceIds
            ]
        );
    }

    #[test]
    fn test_full_section_rewrite() {
        let content = concat!(
            r#"<dt id="7">CN</dt>"#,
            r##"<dd>Congresso Nacional, ver <a href="#8">CD</a> e "##,
            r#"<a href="chapter1.xhtml#42">processo legislativo</a></dd>"#,
        );
        let out = run_for("siglas", content);
        assert_eq!(
            out.text,
            concat!(
                r#"<dt id="siglas-7">CN</dt>"#,
                r##"<dd>Congresso Nacional, ver <a href="#siglas-8">CD</a> e "##,
                r##"<a href="#conceitos-42">processo legislativo</a></dd>"##,
            )
        );
        assert_eq!(out.count(Stage::CrossDocumentLinks), 1);
        assert_eq!(out.count(Stage::InternalLinks), 1);
        assert_eq!(out.count(Stage::NamespaceIds), 1);
    }

    #[test]
    fn test_cross_link_not_renamespaced_by_internal_stage() {
        // The rewritten cross link target keeps the target section prefix,
        // not the current one.
        let out = run_for("partidos", r#"<a href="lista-siglas.xhtml#3">PT</a>"#);
        assert_eq!(out.text, r##"<a href="#siglas-3">PT</a>"##);
        assert_eq!(out.count(Stage::InternalLinks), 0);
    }

    #[test]
    fn test_unresolved_links_collected() {
        let out = run_for("conceitos", r#"<a href="cover.xhtml#1">capa</a>"#);
        assert_eq!(out.unresolved, vec!["cover.xhtml#1".to_string()]);
        assert_eq!(out.text, r#"<a href="cover.xhtml#1">capa</a>"#);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::CrossDocumentLinks.to_string(), "cross-document-links");
        assert_eq!(Stage::InternalLinks.name(), "internal-links");
        assert_eq!(Stage::NamespaceIds.name(), "namespace-ids");
    }
}
