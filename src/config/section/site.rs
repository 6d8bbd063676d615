//! `[site]` configuration.
//!
//! ```toml
//! [site]
//! title = "Personal Site"               # Main page title
//! base_url = "https://example.com"      # Prefix for relative social image URLs
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SITE_TITLE: &str = "Personal Site";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Main page `{{PAGE_TITLE}}` unless the page sidecar sets one.
    pub title: String,

    /// Absolute site URL, without trailing slash.
    pub base_url: Option<String>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_SITE_TITLE.into(),
            base_url: None,
        }
    }
}

impl SiteSectionConfig {
    pub const BASE_URL: FieldPath = FieldPath::new("site.base_url");

    /// Turn a relative URL into an absolute one using `base_url`.
    ///
    /// Absolute URLs and a missing `base_url` leave the input untouched.
    pub fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        match self.base_url.as_deref() {
            Some(base) if !base.is_empty() => {
                format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
            }
            _ => url.to_string(),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.base_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            diag.error_with_hint(
                Self::BASE_URL,
                format!("`{url}` is not an absolute URL"),
                "use a full URL such as `https://example.com`",
            );
        }
    }
}
