//! Page templates with literal `{{PLACEHOLDER}}` slots.
//!
//! Substitution is a single pass over the template: text inserted for one
//! placeholder is never scanned for further placeholders, so a post that
//! talks about `{{CONTENT}}` renders as written. Unknown placeholders are
//! left in place.

use super::{
    BlogError, SidecarMeta,
    presentation::{self, Presentation},
};
use regex::{Captures, Regex};
use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Component, Path},
    sync::LazyLock,
};

pub const POST_TEMPLATE: &str = "blog-post.html.template";
pub const INDEX_TEMPLATE: &str = "blog-index.html.template";
pub const MAIN_TEMPLATE: &str = "index.html.template";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Z][A-Z_]*)\}\}").expect("placeholder pattern is valid")
});

/// Templates of one site build.
#[derive(Debug, Clone)]
pub struct Templates {
    pub post: String,
    pub index: String,
    /// Main page, optional.
    pub main: Option<String>,
    /// `index.html.meta.toml` next to the main page template.
    pub main_meta: SidecarMeta,
    /// `presentations.toml` entries for the main page.
    pub presentations: Vec<Presentation>,
}

impl Templates {
    /// Load all templates from `dir`. The post and index templates are required.
    pub fn load(dir: &Path) -> Result<Self, BlogError> {
        let main_path = dir.join(MAIN_TEMPLATE);
        Ok(Self {
            post: read_required(&dir.join(POST_TEMPLATE))?,
            index: read_required(&dir.join(INDEX_TEMPLATE))?,
            main: read_optional(&main_path)?,
            main_meta: SidecarMeta::load_or_default(&main_path),
            presentations: presentation::load_or_default(dir),
        })
    }
}

fn read_required(path: &Path) -> Result<String, BlogError> {
    read_optional(path)?.ok_or_else(|| BlogError::MissingTemplate(path.to_path_buf()))
}

fn read_optional(path: &Path) -> Result<Option<String>, BlogError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(BlogError::Read(path.to_path_buf(), e)),
    }
}

/// Replace every `{{KEY}}` in `template` whose key appears in `vars`.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let vars: HashMap<&str, &str> = vars.iter().copied().collect();
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1])
                .map_or_else(|| caps[0].to_string(), |value| (*value).to_string())
        })
        .into_owned()
}

// ============================================================================
// Relative paths
// ============================================================================

/// Links from a post page back to site-level pages.
///
/// Posts live at `<output>/blog/<rel>.html`, `depth` directories below the
/// blog root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativePaths {
    pub css: String,
    pub home: String,
    pub blog_index: String,
}

impl RelativePaths {
    /// Paths for a post at `rel` (relative to the content directory).
    pub fn for_post(rel: &Path) -> Self {
        Self::at_depth(depth(rel))
    }

    pub fn at_depth(depth: usize) -> Self {
        let up = "../".repeat(depth);
        Self {
            css: format!("../{up}styles.css"),
            home: format!("../{up}index.html"),
            blog_index: format!("{up}index.html"),
        }
    }
}

/// Number of directories in `rel`.
pub fn depth(rel: &Path) -> usize {
    rel.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
        .saturating_sub(1)
}
