//! Page title and summary from raw markdown.

use serde::Serialize;

use super::{document::RawDocument, inline};
use crate::utils::html::escape;

/// Summary budget for post pages and the blog index.
pub const POST_SUMMARY_BUDGET: usize = 200;
/// Summary budget for the main page's recent-posts block.
pub const RECENT_SUMMARY_BUDGET: usize = 150;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_SUMMARY: &str = "No summary available.";

const ELLIPSIS: &str = "...";

/// How a summary is cleaned and bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStyle {
    /// Maximum length in characters before the ellipsis.
    pub budget: usize,
    /// Drop inline code backticks as well as link and emphasis markup.
    pub strip_inline_code: bool,
}

impl SummaryStyle {
    pub const POST: Self = Self {
        budget: POST_SUMMARY_BUDGET,
        strip_inline_code: true,
    };

    pub const RECENT: Self = Self {
        budget: RECENT_SUMMARY_BUDGET,
        strip_inline_code: false,
    };

    pub const fn with_budget(self, budget: usize) -> Self {
        Self { budget, ..self }
    }
}

impl Default for SummaryStyle {
    fn default() -> Self {
        Self::POST
    }
}

/// Title and summary of a page, HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub summary: String,
}

/// Derive page metadata, falling back to fixed defaults.
pub fn extract(doc: &RawDocument, style: SummaryStyle) -> PageMetadata {
    let title = title(doc).unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let summary = summary(doc, style).unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

    PageMetadata {
        title: escape(&title).into_owned(),
        summary: escape(&summary).into_owned(),
    }
}

/// Text of the first `# ` line, trimmed and unescaped.
pub fn title(doc: &RawDocument) -> Option<String> {
    doc.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|text| text.trim().to_string())
}

/// First non-blank, non-heading, non-code line as bounded plain text, unescaped.
pub fn summary(doc: &RawDocument, style: SummaryStyle) -> Option<String> {
    let line = doc.lines().find(|line| {
        let trimmed = line.trim();
        !trimmed.is_empty()
            && !line.starts_with('#')
            && doc.fences().placeholder_index(trimmed).is_none()
    })?;

    let clean = inline::plain(line, style.strip_inline_code);
    Some(truncate(clean.trim(), style.budget))
}

/// Cut `text` to `budget` characters and append an ellipsis if it was longer.
pub fn truncate(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}
