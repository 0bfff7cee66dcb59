use crate::commands::{CmdMessage, CmdResult};
use crate::config::GlossarioConfig;
use crate::error::Result;
use crate::store::SourceStore;

use super::generate::build_with;

/// Runs the whole merge without writing anything and summarizes the problems.
pub fn run<S: SourceStore>(store: &S, config: &GlossarioConfig) -> Result<CmdResult> {
    run_with(store, config, &mut |_| {})
}

/// Like [`run`], handing each message to `observer` as soon as it is produced.
pub fn run_with<S: SourceStore>(
    store: &S,
    config: &GlossarioConfig,
    observer: &mut dyn FnMut(&CmdMessage),
) -> Result<CmdResult> {
    let (_, mut result) = build_with(store, config, observer)?;

    let issues = result.issue_count();
    let summary = if issues == 0 {
        CmdMessage::success(format!("All {} sections OK", result.reports.len()))
    } else {
        let noun = if issues == 1 { "issue" } else { "issues" };
        CmdMessage::error(format!("{} {} found", issues, noun))
    };
    result.emit(summary, observer);
    Ok(result)
}
