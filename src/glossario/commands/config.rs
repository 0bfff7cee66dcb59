use crate::commands::CmdResult;
use crate::config::GlossarioConfig;
use crate::error::Result;

/// Returns the effective configuration after validating it.
pub fn run(config: &GlossarioConfig) -> Result<CmdResult> {
    config.validate()?;
    Ok(CmdResult::default().with_config(config.clone()))
}
