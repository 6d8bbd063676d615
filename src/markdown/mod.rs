//! Markdown dialect used for blog posts.
//!
//! This module contains the whole markdown → HTML conversion:
//!
//! - [`fence`] - Fenced code isolation and restore
//! - [`inline`] - Link, bold, italic, inline code substitution
//! - [`block`] - Header / paragraph / list structure
//! - [`slug`] - Heading anchor slugs
//! - [`anchor`] - Heading anchors, `id` injection into raw HTML headers
//! - [`toc`] - Table of contents from raw headings
//! - [`meta`] - Title and summary extraction
//! - [`convert`] - The pipeline tying them together
//!
//! # Pipeline
//!
//! ```text
//! raw ─► fence::isolate ─► block::structure ─► block::render ─► anchor::annotate ─► restore
//!  │
//!  ├─► toc::collect ─► toc::render
//!  └─► meta::extract
//! ```
//!
//! `block::structure` and `toc::collect` both anchor headings through
//! `anchor::heading_anchor`, so a TOC link always matches its header `id`.
//!
//! Recognized syntax: `#`..`######` headings, `* ` bullet items, fenced code,
//! `[text](url)`, `**bold**`, `*italic*`, `` `code` ``. Nothing else.

mod anchor;
mod block;
mod convert;
mod document;
mod fence;
mod inline;
mod meta;
mod slug;
mod toc;

pub use convert::{ConversionResult, ConvertOptions, convert, metadata};
pub use meta::{PageMetadata, SummaryStyle};
