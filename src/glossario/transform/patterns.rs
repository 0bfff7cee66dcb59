//! Cached regex patterns for the XHTML rewrites.
//!
//! All patterns work on raw markup text, not on a parsed tree. They match the
//! exact shapes produced by the EPUB toolchain (double-quoted attributes, `href`
//! as the only anchor attribute, plain text as the anchor body).

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Content between the first `<body ...>` and the next `</body>`
pub static BODY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<body[^>]*>(.*?)</body>").unwrap());

/// `<a href="other.xhtml#frag">text</a>`
pub static CROSS_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a href="([^"]*\.xhtml#[^"]+)">([^<]+)</a>"#).unwrap());

/// `<a href="#123">text</a>`
pub static INTERNAL_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"<a href="#(\d+)">([^<]+)</a>"##).unwrap());

/// `id="123"`
pub static NUMERIC_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"id="(\d+)""#).unwrap());
