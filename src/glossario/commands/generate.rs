use crate::commands::{CmdMessage, CmdResult, PageOutput};
use crate::config::GlossarioConfig;
use crate::error::Result;
use crate::page;
use crate::store::SourceStore;
use crate::transform::Pipeline;
use std::fs;

use super::helpers::{process_section, report_warnings};

/// Merges every configured section and writes the page to the output path.
pub fn run<S: SourceStore>(store: &S, config: &GlossarioConfig) -> Result<CmdResult> {
    run_with(store, config, &mut |_| {})
}

/// Like [`run`], handing each message to `observer` as soon as it is produced.
pub fn run_with<S: SourceStore>(
    store: &S,
    config: &GlossarioConfig,
    observer: &mut dyn FnMut(&CmdMessage),
) -> Result<CmdResult> {
    let (html, mut result) = build_with(store, config, observer)?;

    // Written once, after every section is built.
    fs::write(&config.output_path, &html)?;
    let output = PageOutput {
        path: config.output_path.clone(),
        bytes: fs::metadata(&config.output_path)?.len(),
    };

    let generated = format!("Generated {}", output.path.display());
    result.emit(CmdMessage::success(generated), observer);
    result.emit(CmdMessage::info(format!("Size: {:.1} KiB", output.kib())), observer);
    Ok(result.with_output(output))
}

/// Renders the page without writing it.
pub fn build<S: SourceStore>(store: &S, config: &GlossarioConfig) -> Result<(String, CmdResult)> {
    build_with(store, config, &mut |_| {})
}

/// Progress and warnings reach `observer` before the next section is read,
/// so they are not lost when a later read fails.
pub fn build_with<S: SourceStore>(
    store: &S,
    config: &GlossarioConfig,
    observer: &mut dyn FnMut(&CmdMessage),
) -> Result<(String, CmdResult)> {
    config.validate()?;

    let pipeline = Pipeline::standard();
    let mut result = CmdResult::default();
    let mut blocks = Vec::new();
    let mut reports = Vec::with_capacity(config.sections.len());

    for section in &config.sections {
        result.emit(CmdMessage::info(format!("Processing {}...", section.file)), observer);

        let processed = process_section(store, section, &config.sections, &pipeline)?;
        for warning in report_warnings(store, &processed.report) {
            result.emit(warning, observer);
        }
        if let Some(html) = processed.html {
            blocks.push(page::wrap_section(section, &html));
        }
        reports.push(processed.report);
    }

    let html = page::assemble(&config.page, &config.sections, &blocks);
    Ok((html, result.with_reports(reports)))
}
