//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! glossario operations, whatever the UI.
//!
//! The facade owns the effective [`GlossarioConfig`] and a [`SourceStore`],
//! dispatches to `commands/*.rs` and hands back `Result<CmdResult>`. It does no
//! printing and holds no merge logic of its own.
//!
//! `GlossarioApi<S: SourceStore>` is generic over the store:
//! - Production: `GlossarioApi<DirStore>`
//! - Testing: `GlossarioApi<InMemoryStore>`

use crate::commands;
use crate::config::GlossarioConfig;
use crate::error::Result;
use crate::store::SourceStore;
use std::path::Path;

pub struct GlossarioApi<S: SourceStore> {
    store: S,
    config: GlossarioConfig,
}

impl<S: SourceStore> GlossarioApi<S> {
    pub fn new(store: S, config: GlossarioConfig) -> Self {
        Self { store, config }
    }

    pub fn generate(&self) -> Result<commands::CmdResult> {
        commands::generate::run(&self.store, &self.config)
    }

    pub fn check(&self) -> Result<commands::CmdResult> {
        commands::check::run(&self.store, &self.config)
    }

    /// [`generate`](Self::generate), reporting each message as it happens.
    pub fn generate_with(
        &self,
        mut observer: impl FnMut(&commands::CmdMessage),
    ) -> Result<commands::CmdResult> {
        commands::generate::run_with(&self.store, &self.config, &mut observer)
    }

    /// [`check`](Self::check), reporting each message as it happens.
    pub fn check_with(
        &self,
        mut observer: impl FnMut(&commands::CmdMessage),
    ) -> Result<commands::CmdResult> {
        commands::check::run_with(&self.store, &self.config, &mut observer)
    }

    pub fn config(&self) -> Result<commands::CmdResult> {
        commands::config::run(&self.config)
    }

    pub fn init(&self, path: &Path, force: bool) -> Result<commands::CmdResult> {
        commands::init::run(path, force)
    }

    pub fn settings(&self) -> &GlossarioConfig {
        &self.config
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, PageOutput};
