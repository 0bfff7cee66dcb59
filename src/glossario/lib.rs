//! # Glossario Architecture
//!
//! Glossario turns the XHTML chapters of an EPUB glossary into a single static
//! HTML page. Each chapter becomes a `<section>`; a script referenced by the
//! page shows one section at a time, like tabs.
//!
//! Merging files into one page breaks two things, and fixing them is most of
//! the work:
//! - links between chapters (`lista-siglas.xhtml#12`) point at files that no
//!   longer exist
//! - element ids (`id="12"`) repeat across chapters
//!
//! Every numeric id is therefore prefixed with its section id (`siglas-12`) and
//! every link is rewritten to match.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints messages, sets the exit code    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning the config and the source store       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - generate, check, config, init                            │
//! │  - Returns CmdResult with messages and section reports      │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐  ┌──────────────────────────┐
//! │  transform/ + page.rs         │  │  Storage Layer (store/)  │
//! │  - Pure text rewrites         │  │  - SourceStore trait     │
//! │  - Header/section/footer      │  │  - DirStore, InMemory    │
//! └───────────────────────────────┘  └──────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! The only file the library writes is the generated page (and the config file
//! on `init`).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`transform`]: Body extraction and the ordered rewrite pipeline
//! - [`page`]: Header, section container and footer markup
//! - [`store`]: Source document access
//! - [`config`]: Paths, section list and page text
//! - [`model`]: Section descriptors and reports
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod page;
pub mod store;
pub mod transform;
