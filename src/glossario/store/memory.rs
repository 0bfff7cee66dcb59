use super::SourceStore;
use crate::error::{GlossarioError, Result};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::PathBuf;

/// In-memory documents for testing.
#[derive(Default)]
pub struct InMemoryStore {
    documents: HashMap<String, String>,
    unreadable: HashSet<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, file: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(file, content);
        self
    }

    pub fn insert(&mut self, file: impl Into<String>, content: impl Into<String>) {
        self.documents.insert(file.into(), content.into());
    }

    /// Makes every later read of `file` fail as if it were not valid UTF-8.
    pub fn fail_on(&mut self, file: impl Into<String>) {
        self.unreadable.insert(file.into());
    }
}

impl SourceStore for InMemoryStore {
    fn read_document(&self, file: &str) -> Result<Option<String>> {
        if self.unreadable.contains(file) {
            return Err(GlossarioError::Read {
                path: self.document_path(file),
                source: io::Error::new(io::ErrorKind::InvalidData, "invalid UTF-8"),
            });
        }
        Ok(self.documents.get(file).cloned())
    }

    fn document_path(&self, file: &str) -> PathBuf {
        PathBuf::from("memory").join(file)
    }
}

// --- Test Fixtures ---
