use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::{SectionDescriptor, SectionReport, SectionStatus};
use crate::store::SourceStore;
use crate::transform::{duplicate_ids, extract_body, Pipeline, Stage, StageContext};

/// One descriptor after reading and rewriting. `html` is `None` when the
/// section is skipped.
#[derive(Debug)]
pub struct ProcessedSection {
    pub report: SectionReport,
    pub html: Option<String>,
}

pub fn process_section<S: SourceStore>(
    store: &S,
    section: &SectionDescriptor,
    sections: &[SectionDescriptor],
    pipeline: &Pipeline,
) -> Result<ProcessedSection> {
    let Some(document) = store.read_document(&section.file)? else {
        return Ok(ProcessedSection {
            report: SectionReport::new(section, SectionStatus::Missing),
            html: None,
        });
    };

    let body = extract_body(&document);
    if body.is_empty() {
        return Ok(ProcessedSection {
            report: SectionReport::new(section, SectionStatus::Empty),
            html: None,
        });
    }

    let ctx = StageContext { section, sections };
    let out = pipeline.run(body, &ctx);

    let mut report = SectionReport::new(section, SectionStatus::Rendered);
    report.cross_links = out.count(Stage::CrossDocumentLinks);
    report.internal_links = out.count(Stage::InternalLinks);
    report.namespaced_ids = out.count(Stage::NamespaceIds);
    report.unresolved_links = out.unresolved;
    report.duplicate_ids = duplicate_ids(body);

    Ok(ProcessedSection {
        report,
        html: Some(out.text),
    })
}

/// Warnings describing everything questionable in a report.
pub fn report_warnings<S: SourceStore>(store: &S, report: &SectionReport) -> Vec<CmdMessage> {
    let mut messages = Vec::new();

    match report.status {
        SectionStatus::Missing => messages.push(CmdMessage::warning(format!(
            "Source not found: {}",
            store.document_path(&report.file).display()
        ))),
        SectionStatus::Empty => {
            messages.push(CmdMessage::warning(format!("Empty body in {}", report.file)))
        }
        SectionStatus::Rendered => {}
    }

    for href in &report.unresolved_links {
        messages.push(CmdMessage::warning(format!(
            "Unresolved link in {}: {}",
            report.file, href
        )));
    }
    for id in &report.duplicate_ids {
        messages.push(CmdMessage::warning(format!(
            "Duplicate id in {}: {}",
            report.file, id
        )));
    }

    messages
}
