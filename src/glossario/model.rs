use serde::{Deserialize, Serialize};

/// One source document and the page section it becomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// Source filename, relative to the source directory (e.g. `chapter1.xhtml`)
    pub file: String,
    /// Container id and namespace prefix (e.g. `conceitos`)
    pub id: String,
    /// Display title, used for the section heading and the menu button
    pub title: String,
    /// The section shown when the page loads
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub primary: bool,
}

impl SectionDescriptor {
    pub fn new(file: impl Into<String>, id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            id: id.into(),
            title: title.into(),
            primary: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    Rendered,
    Missing,
    Empty,
}

/// Outcome of processing one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub id: String,
    pub file: String,
    pub status: SectionStatus,
    pub cross_links: usize,
    pub internal_links: usize,
    pub namespaced_ids: usize,
    pub unresolved_links: Vec<String>,
    pub duplicate_ids: Vec<String>,
}

impl SectionReport {
    pub fn new(section: &SectionDescriptor, status: SectionStatus) -> Self {
        Self {
            id: section.id.clone(),
            file: section.file.clone(),
            status,
            cross_links: 0,
            internal_links: 0,
            namespaced_ids: 0,
            unresolved_links: Vec::new(),
            duplicate_ids: Vec::new(),
        }
    }

    /// Number of problems worth a warning.
    pub fn issue_count(&self) -> usize {
        let status = match self.status {
            SectionStatus::Rendered => 0,
            SectionStatus::Missing | SectionStatus::Empty => 1,
        };
        status + self.unresolved_links.len() + self.duplicate_ids.len()
    }
}
