//! # Source Storage
//!
//! The [`SourceStore`] trait is where the commands get their XHTML documents
//! from. Sources are read-only: nothing in the crate ever writes back to them.
//!
//! ## Implementations
//!
//! - [`fs::DirStore`]: reads `{source_dir}/{file}` from disk (production)
//! - [`memory::InMemoryStore`]: documents held in a map (testing)
//!
//! ## Missing vs. failing
//!
//! A document that does not exist is an expected condition: the section is
//! skipped with a warning, so `read_document` returns `Ok(None)`. Anything
//! else that goes wrong while reading (permissions, invalid UTF-8) is an `Err`
//! and aborts the run.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait SourceStore {
    /// Full text of `file`, or `None` if it does not exist
    fn read_document(&self, file: &str) -> Result<Option<String>>;

    /// Where `file` lives, for messages
    fn document_path(&self, file: &str) -> PathBuf;
}
