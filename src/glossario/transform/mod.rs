//! # Markup Transforms
//!
//! Pure text-to-text functions that turn one XHTML chapter into a section of
//! the merged page. Nothing here touches the filesystem.
//!
//! - [`body::extract_body`]: the markup between the body tags
//! - [`links`]: cross-document and internal anchor rewriting
//! - [`ids`]: identifier namespacing and duplicate detection
//! - [`pipeline::Pipeline`]: the rewrites as an ordered list of named stages
//!
//! Everything is regex based. The inputs come from a single EPUB toolchain with
//! predictable markup, so a full HTML parser is not needed.

pub mod body;
pub mod ids;
pub mod links;
pub mod patterns;
pub mod pipeline;

pub use body::extract_body;
pub use ids::{duplicate_ids, namespace_ids};
pub use links::{rewrite_cross_document_links, rewrite_internal_links, LinkRewrite};
pub use pipeline::{Pipeline, PipelineOutput, Stage, StageContext, StageOutput};
