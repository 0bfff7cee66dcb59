use crate::commands::{CmdMessage, CmdResult};
use crate::config::GlossarioConfig;
use crate::error::{GlossarioError, Result};
use std::path::Path;

/// Writes the default configuration to `path`.
pub fn run(path: &Path, force: bool) -> Result<CmdResult> {
    if path.exists() && !force {
        return Err(GlossarioError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let config = GlossarioConfig::default();
    config.save(path)?;

    let mut result = CmdResult::default().with_config(config);
    result.add_message(CmdMessage::success(format!(
        "Wrote default configuration to {}",
        path.display()
    )));
    Ok(result)
}
