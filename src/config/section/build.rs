//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "src/blog"          # Markdown post sources (relative to site root)
//! templates = "src/templates"   # Page templates (relative to site root)
//! static = "src/static"         # Copied verbatim into the output directory
//! output = "dist"               # Output root, posts are written to <output>/blog
//! recent = 5                    # Number of posts listed on the main page
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::normalize_path;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Subdirectory of the output root that receives post pages.
pub const BLOG_DIR: &str = "blog";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Post source directory.
    pub content: PathBuf,

    /// Directory holding `blog-post.html.template` and friends.
    pub templates: PathBuf,

    /// Static files copied into the output root.
    #[serde(rename = "static")]
    pub static_dir: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Posts shown in the main page's recent block.
    pub recent: usize,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "src/blog".into(),
            templates: "src/templates".into(),
            static_dir: "src/static".into(),
            output: "dist".into(),
            recent: 5,
            clean: false,
        }
    }
}

impl BuildSectionConfig {
    pub const CONTENT: FieldPath = FieldPath::new("build.content");
    pub const TEMPLATES: FieldPath = FieldPath::new("build.templates");
    pub const RECENT: FieldPath = FieldPath::new("build.recent");

    /// Output directory for post pages and the blog index.
    pub fn blog_output(&self) -> PathBuf {
        self.output.join(BLOG_DIR)
    }

    /// Resolve every path against the site root.
    pub fn normalize(&mut self, root: &Path) {
        for path in [
            &mut self.content,
            &mut self.templates,
            &mut self.static_dir,
            &mut self.output,
        ] {
            *path = normalize_path(&root.join(&*path));
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.recent == 0 {
            diag.error(Self::RECENT, "must list at least one post");
        }
    }

    /// Checks that only matter when actually building the site.
    pub fn validate_for_build(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.is_dir() {
            diag.error_with_hint(
                Self::CONTENT,
                format!("content directory `{}` not found", self.content.display()),
                "create it or point `build.content` at your posts",
            );
        }
        if !self.templates.is_dir() {
            diag.error_with_hint(
                Self::TEMPLATES,
                format!(
                    "templates directory `{}` not found",
                    self.templates.display()
                ),
                "it must contain `blog-post.html.template` and `blog-index.html.template`",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, PathBuf::from("src/blog"));
        assert_eq!(config.build.templates, PathBuf::from("src/templates"));
        assert_eq!(config.build.static_dir, PathBuf::from("src/static"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.recent, 5);
        assert!(!config.build.clean);
    }

    #[test]
    fn test_static_key_renamed() {
        let config = test_parse_config("[build]\nstatic = \"public\"");
        assert_eq!(config.build.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_normalize_against_root() {
        let mut build = BuildSectionConfig::default();
        build.normalize(Path::new("/site"));
        assert_eq!(build.content, PathBuf::from("/site/src/blog"));
        assert_eq!(build.blog_output(), PathBuf::from("/site/dist/blog"));
    }

    #[test]
    fn test_validate_recent() {
        let config = test_parse_config("[build]\nrecent = 0");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_validate_for_build_missing_dirs() {
        let dir = TempDir::new().unwrap();
        let mut build = BuildSectionConfig::default();
        build.normalize(dir.path());

        let mut diag = ConfigDiagnostics::new();
        build.validate_for_build(&mut diag);
        assert_eq!(diag.len(), 2);

        std::fs::create_dir_all(&build.content).unwrap();
        std::fs::create_dir_all(&build.templates).unwrap();
        let mut diag = ConfigDiagnostics::new();
        build.validate_for_build(&mut diag);
        assert!(diag.is_empty());
    }
}
