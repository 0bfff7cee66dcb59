use super::SourceStore;
use crate::error::{GlossarioError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads source documents from a directory on disk.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceStore for DirStore {
    fn read_document(&self, file: &str) -> Result<Option<String>> {
        let path = self.document_path(file);
        if !path.exists() {
            return Ok(None);
        }
        let content =
            fs::read_to_string(&path).map_err(|source| GlossarioError::Read { path, source })?;
        Ok(Some(content))
    }

    fn document_path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }
}
