//! Blog posts as pages.
//!
//! - [`collect`] - Post discovery under the content directory
//! - [`sidecar`] - Optional `<stem>.meta.toml` social metadata
//! - [`template`] - Template loading and `{{PLACEHOLDER}}` substitution
//! - [`post`] - One markdown file → one rendered page plus its index entry
//! - [`index`] - Blog index and recent-posts fragments
//! - [`presentation`] - Talks listed on the main page

pub mod collect;
pub mod index;
pub mod post;
pub mod presentation;
pub mod sidecar;
pub mod template;

pub use post::PostEntry;
pub use sidecar::SidecarMeta;
pub use template::Templates;

use std::path::PathBuf;
use thiserror::Error;

/// Errors around reading posts and their companions.
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("template `{0}` not found")]
    MissingTemplate(PathBuf),

    #[error("invalid sidecar metadata in `{0}`")]
    Sidecar(PathBuf, #[source] toml::de::Error),

    #[error("invalid presentations list in `{0}`")]
    Presentations(PathBuf, #[source] toml::de::Error),

    #[error("`{0}` is not inside the content directory")]
    OutsideContent(PathBuf),
}
