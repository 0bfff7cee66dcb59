use crate::config::GlossarioConfig;
use crate::model::SectionReport;
use std::path::PathBuf;

pub mod check;
pub mod config;
pub mod generate;
pub mod helpers;
pub mod init;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The written page: where it went and how big it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutput {
    pub path: PathBuf,
    pub bytes: u64,
}

impl PageOutput {
    pub fn kib(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub reports: Vec<SectionReport>,
    pub output: Option<PageOutput>,
    pub config: Option<GlossarioConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Hands `message` to `observer` before keeping it, so a caller can show
    /// progress even if the command later fails.
    pub fn emit(&mut self, message: CmdMessage, observer: &mut dyn FnMut(&CmdMessage)) {
        observer(&message);
        self.messages.push(message);
    }

    pub fn with_reports(mut self, reports: Vec<SectionReport>) -> Self {
        self.reports = reports;
        self
    }

    pub fn with_output(mut self, output: PageOutput) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_config(mut self, config: GlossarioConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Total warnings across all section reports.
    pub fn issue_count(&self) -> usize {
        self.reports.iter().map(SectionReport::issue_count).sum()
    }

    pub fn messages_at(&self, level: MessageLevel) -> impl Iterator<Item = &CmdMessage> {
        self.messages.iter().filter(move |m| m.level == level)
    }
}
