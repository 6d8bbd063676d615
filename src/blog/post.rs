//! One post: markdown source → rendered page and index entry.

use super::{
    BlogError, SidecarMeta, Templates,
    template::{self, RelativePaths},
};
use crate::{
    config::{SummarySectionConfig, section::BLOG_DIR},
    markdown::{self, ConvertOptions, PageMetadata},
    utils::date::{DEFAULT_PUBLISHED, PostDate},
};
use serde::Serialize;
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

const DEFAULT_OG_TYPE: &str = "article";
const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

/// A post read from disk.
#[derive(Debug, Clone)]
pub struct PostSource {
    pub path: PathBuf,
    /// Path relative to the content directory.
    pub rel: PathBuf,
    pub markdown: String,
}

impl PostSource {
    pub fn read(path: &Path, content_dir: &Path) -> Result<Self, BlogError> {
        let rel = path
            .strip_prefix(content_dir)
            .map_err(|_| BlogError::OutsideContent(path.to_path_buf()))?
            .to_path_buf();
        let markdown =
            fs::read_to_string(path).map_err(|e| BlogError::Read(path.to_path_buf(), e))?;
        Ok(Self {
            path: path.to_path_buf(),
            rel,
            markdown,
        })
    }

    /// Index entry from already extracted post metadata.
    pub fn entry(
        &self,
        meta: PageMetadata,
        summary: &SummarySectionConfig,
        sidecar: SidecarMeta,
    ) -> PostEntry {
        let dated = PostDate::from_path(&self.rel);
        let date = dated.unwrap_or_else(PostDate::today);
        let recent = markdown::metadata(&self.markdown, summary.recent_style());

        PostEntry {
            source: self.path.clone(),
            url: page_url(&self.rel),
            date,
            date_display: date.to_display(),
            published: dated.map_or_else(|| DEFAULT_PUBLISHED.to_string(), PostDate::to_published),
            title: meta.title,
            summary: meta.summary,
            recent_summary: recent.summary,
            sidecar,
        }
    }

    /// Index entry without rendering the body.
    pub fn summarize(&self, summary: &SummarySectionConfig) -> PostEntry {
        let meta = markdown::metadata(&self.markdown, summary.post_style());
        self.entry(meta, summary, SidecarMeta::load_or_default(&self.path))
    }

    /// Convert the post and fill the post page template.
    pub fn render(&self, templates: &Templates, summary: &SummarySectionConfig) -> PostPage {
        let result = markdown::convert(
            &self.markdown,
            &ConvertOptions::with_summary(summary.post_style()),
        );
        let sidecar = SidecarMeta::load_or_default(&self.path);
        let entry = self.entry(result.meta, summary, sidecar);
        let paths = RelativePaths::for_post(&self.rel);
        let site_url = entry.site_url();
        let og_tags = entry.sidecar.og_image_tags(str::to_string);
        let twitter_tag = entry.sidecar.twitter_image_tag(str::to_string);

        let og_type = entry.sidecar.og.kind.as_deref().unwrap_or(DEFAULT_OG_TYPE);
        let twitter_card = entry
            .sidecar
            .twitter
            .card
            .as_deref()
            .unwrap_or(DEFAULT_TWITTER_CARD);

        let html = template::render(
            &templates.post,
            &[
                ("TITLE", entry.title.as_str()),
                ("TABLE_OF_CONTENTS", result.toc.as_str()),
                ("CONTENT", result.html.as_str()),
                ("CSS_PATH", paths.css.as_str()),
                ("HOME_PATH", paths.home.as_str()),
                ("BLOG_INDEX_PATH", paths.blog_index.as_str()),
                ("SUMMARY", entry.summary.as_str()),
                ("PUBLISHED_DATE", entry.published.as_str()),
                ("BLOG_URL", site_url.as_str()),
                ("OG_TYPE", og_type),
                ("OG_IMAGE_META", og_tags.as_str()),
                ("TWITTER_CARD_TYPE", twitter_card),
                ("TWITTER_IMAGE_META", twitter_tag.as_str()),
            ],
        );

        PostPage {
            output: self.rel.with_extension("html"),
            entry,
            html,
        }
    }
}

/// Post metadata listed on index pages and printed by `query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostEntry {
    pub source: PathBuf,
    /// Page URL relative to the blog root (`2024/03/07/hello.html`).
    pub url: String,
    /// Date from the path, today for undated posts.
    pub date: PostDate,
    pub date_display: String,
    /// `PUBLISHED_DATE` value.
    pub published: String,
    /// HTML-escaped.
    pub title: String,
    /// HTML-escaped, post budget.
    pub summary: String,
    /// HTML-escaped, recent budget.
    pub recent_summary: String,
    pub sidecar: SidecarMeta,
}

impl PostEntry {
    /// Page URL relative to the site root (`blog/2024/03/07/hello.html`).
    pub fn site_url(&self) -> String {
        format!("{BLOG_DIR}/{}", self.url)
    }

    /// Newest first, then by URL.
    pub fn sort(entries: &mut [Self]) {
        entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.url.cmp(&b.url)));
    }
}

/// A rendered post page.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub entry: PostEntry,
    /// Output path relative to the blog output directory.
    pub output: PathBuf,
    pub html: String,
}

impl PostPage {
    pub fn write(&self, blog_output: &Path) -> Result<PathBuf, BlogError> {
        let path = blog_output.join(&self.output);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BlogError::Write(parent.to_path_buf(), e))?;
        }
        fs::write(&path, &self.html).map_err(|e| BlogError::Write(path.clone(), e))?;
        Ok(path)
    }
}

/// `2024/03/07/hello.md` → `2024/03/07/hello.html`, always `/`-separated.
pub fn page_url(rel: &Path) -> String {
    rel.with_extension("html")
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
