//! Table of contents from raw heading lines.
//!
//! Headings are read from the markdown source rather than the rendered HTML.
//! The anchor comes from [`heading_anchor`], which also supplies the `id` of
//! the rendered header.

use serde::Serialize;

use super::{anchor::heading_anchor, block::parse_heading, document::RawDocument, inline};
use crate::utils::html::escape;

/// A heading found in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    pub level: u8,
    /// Raw heading text, trimmed.
    pub title: String,
    pub anchor: String,
}

impl HeadingEntry {
    fn new(level: u8, raw: &str) -> Self {
        let title = raw.trim().to_string();
        let anchor = heading_anchor(&title);
        Self {
            level,
            title,
            anchor,
        }
    }

    /// Plain-text label shown in the table of contents.
    pub fn label(&self) -> String {
        inline::plain(&self.title, true)
    }
}

/// All headings of `doc` in document order.
pub fn collect(doc: &RawDocument) -> Vec<HeadingEntry> {
    doc.lines()
        .filter_map(parse_heading)
        .map(|(level, text)| HeadingEntry::new(level, text))
        .collect()
}

/// Render the collapsible navigation fragment, or `""` without headings.
pub fn render(headings: &[HeadingEntry]) -> String {
    if headings.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"table-of-contents\">\n");
    html.push_str("<input type=\"checkbox\" id=\"toc-toggle\" class=\"toc-checkbox\">\n");
    html.push_str(
        "<label for=\"toc-toggle\" class=\"toc-header\">Table of Contents <span class=\"toc-arrow\"></span></label>\n",
    );
    html.push_str("<ul class=\"toc-content\">\n");

    for heading in headings {
        html.push_str(&format!(
            "  <li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>\n",
            heading.level,
            heading.anchor,
            escape(&heading.label())
        ));
    }

    html.push_str("</ul>\n</div>");
    html
}
