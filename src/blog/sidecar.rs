//! Sidecar metadata next to a page source.
//!
//! `2024/03/07/hello.md` may be accompanied by `2024/03/07/hello.meta.toml`:
//!
//! ```toml
//! [og]
//! type = "article"
//! image = "img/cover.png"
//! image_alt = "A cover"
//!
//! [twitter]
//! card = "summary"
//!
//! [thumbnail]
//! image = "img/thumb.png"
//! alt = "Thumbnail"
//! ```
//!
//! The main page template reads `index.html.meta.toml` the same way, plus
//! `title` and `description`.

use super::BlogError;
use crate::{log, utils::html::escape_attr};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

const SIDECAR_SUFFIX: &str = "meta.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidecarMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub og: OgMeta,
    pub twitter: TwitterMeta,
    pub thumbnail: ThumbnailMeta,
}

/// `[og]` OpenGraph fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OgMeta {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub site_name: Option<String>,
    pub url: Option<String>,
}

/// `[twitter]` card fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterMeta {
    pub card: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailMeta {
    pub image: Option<String>,
    pub alt: Option<String>,
}

/// `dir/name.md` → `dir/name.meta.toml`, `dir/index.html.template` → `dir/index.html.meta.toml`
pub fn sidecar_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}.{SIDECAR_SUFFIX}"))
}

impl SidecarMeta {
    /// Read the sidecar of `source`. `Ok(None)` if there is none.
    pub fn load(source: &Path) -> Result<Option<Self>, BlogError> {
        let path = sidecar_path(source);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(BlogError::Read(path, e)),
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| BlogError::Sidecar(path, e))
    }

    /// Like [`load`](Self::load), but a broken sidecar is reported and ignored.
    pub fn load_or_default(source: &Path) -> Self {
        match Self::load(source) {
            Ok(meta) => meta.unwrap_or_default(),
            Err(e) => {
                log!("warning"; "{:#}", anyhow::Error::from(e));
                Self::default()
            }
        }
    }

    /// OpenGraph image, falling back to the thumbnail.
    pub fn og_image(&self) -> Option<&str> {
        self.og
            .image
            .as_deref()
            .or(self.thumbnail.image.as_deref())
    }

    pub fn og_image_alt(&self) -> Option<&str> {
        self.og
            .image_alt
            .as_deref()
            .or(self.thumbnail.alt.as_deref())
    }

    /// Twitter image, falling back to the OpenGraph image.
    pub fn twitter_image(&self) -> Option<&str> {
        self.twitter.image.as_deref().or(self.og_image())
    }

    // ========================================================================
    // meta tags
    // ========================================================================

    /// `og:image` and `og:image:alt` tags, each on its own indented line.
    ///
    /// `resolve` maps the configured image URL to the emitted one.
    pub fn og_image_tags(&self, resolve: impl Fn(&str) -> String) -> String {
        let Some(image) = self.og_image() else {
            return String::new();
        };
        let mut tags = meta_tag("property", "og:image", &resolve(image));
        if let Some(alt) = self.og_image_alt() {
            tags.push_str(&meta_tag("property", "og:image:alt", alt));
        }
        tags
    }

    pub fn twitter_image_tag(&self, resolve: impl Fn(&str) -> String) -> String {
        self.twitter_image()
            .map(|image| meta_tag("name", "twitter:image", &resolve(image)))
            .unwrap_or_default()
    }
}

/// `\n    <meta {attr}="{key}" content="{content}">`
pub fn meta_tag(attr: &str, key: &str, content: &str) -> String {
    format!(
        "\n    <meta {attr}=\"{key}\" content=\"{}\">",
        escape_attr(content)
    )
}
