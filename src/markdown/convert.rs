//! Markdown → HTML conversion pipeline.

use serde::Serialize;

use super::{
    anchor, block,
    document::RawDocument,
    meta::{self, PageMetadata, SummaryStyle},
    toc,
};
use crate::debug;

/// Options for markdown conversion
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Summary cleaning and length budget.
    pub summary: SummaryStyle,
}

impl ConvertOptions {
    pub const fn with_summary(summary: SummaryStyle) -> Self {
        Self { summary }
    }
}

/// Everything derived from one markdown document.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    /// HTML body fragment.
    pub html: String,
    /// Table of contents fragment, empty without headings.
    pub toc: String,
    pub meta: PageMetadata,
}

/// Convert a markdown document.
///
/// Never fails: malformed markup degrades to literal text and missing
/// metadata to fixed defaults.
pub fn convert(markdown: &str, options: &ConvertOptions) -> ConversionResult {
    let doc = RawDocument::new(markdown);

    let blocks = block::structure(doc.lines(), doc.fences());
    let html = block::render(&blocks, doc.fences());
    // Annotate before restoring fences so header-like text inside code stays verbatim.
    let html = anchor::annotate(&html);
    let html = doc.fences().restore(&html);

    let headings = toc::collect(&doc);
    let toc = toc::render(&headings);
    let meta = meta::extract(&doc, options.summary);

    debug!(
        "markdown";
        "{} blocks, {} fences, {} headings",
        blocks.len(),
        doc.fences().len(),
        headings.len()
    );

    ConversionResult { html, toc, meta }
}

/// Title and summary only, without rendering the body.
pub fn metadata(markdown: &str, summary: SummaryStyle) -> PageMetadata {
    meta::extract(&RawDocument::new(markdown), summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn run(markdown: &str) -> ConversionResult {
        convert(markdown, &ConvertOptions::default())
    }

    #[test]
    fn test_convert_heading_and_emphasis() {
        let result = run("# Hello\n\nThis is **bold** and *italic*.");
        assert_eq!(result.meta.title, "Hello");
        assert!(result.html.contains(r#"<h1 id="hello">Hello</h1>"#));
        assert!(
            result
                .html
                .contains("<p>This is <strong>bold</strong> and <em>italic</em>.</p>")
        );
    }

    #[test]
    fn test_convert_toc_links_in_order() {
        let result = run("## A\n...\n## B");
        let a = result.toc.find(r##"href="#a""##).unwrap();
        let b = result.toc.find(r##"href="#b""##).unwrap();
        assert!(a < b);
        assert_eq!(result.toc.matches("<li ").count(), 2);
    }

    #[test]
    fn test_convert_list_then_paragraph() {
        let result = run("* one\n* two\n\nthree");
        assert_eq!(
            result.html,
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n\n<p>three</p>"
        );
    }

    #[test]
    fn test_convert_code_fence_not_escaped() {
        let result = run("```\n<script>\n```");
        assert_eq!(result.html, "<pre><code><script></code></pre>");
    }

    #[test]
    fn test_convert_code_fence_body_verbatim() {
        let body = "# not a header\n* not a list\n**not bold** `not code` [no](link)\n<h2>raw</h2>";
        let result = run(&format!("# Title\n```\n{body}\n```\nafter"));
        assert!(result.html.contains(&format!("<pre><code>{body}</code></pre>")));
        assert_eq!(result.toc.matches("<li ").count(), 1);
    }

    #[test]
    fn test_convert_unterminated_fence_passes_through() {
        let result = run("```\nloose *text*");
        assert_eq!(result.html, "<p>```</p>\n<p>loose <em>text</em></p>");
    }

    #[test]
    fn test_convert_empty_document() {
        let result = run("");
        assert_eq!(result.html, "");
        assert_eq!(result.toc, "");
        assert_eq!(result.meta.title, meta::DEFAULT_TITLE);
        assert_eq!(result.meta.summary, meta::DEFAULT_SUMMARY);
    }

    #[test]
    fn test_toc_anchors_match_header_ids() {
        let source = "# Getting Started\n\
                      intro\n\
                      ## Install & Setup\n\
                      ### Step 1: download\n\
                      ## FAQ -- Common Questions\n\
                      ###### Tiny  heading!\n\
                      ## Using `cargo` **fast**";
        let result = run(source);

        let id_re = Regex::new(r#"<h[1-6] id="([^"]*)">"#).unwrap();
        let ids: Vec<_> = id_re
            .captures_iter(&result.html)
            .map(|c| c[1].to_string())
            .collect();

        let href_re = Regex::new(r##"href="#([^"]*)""##).unwrap();
        let hrefs: Vec<_> = href_re
            .captures_iter(&result.toc)
            .map(|c| c[1].to_string())
            .collect();

        assert_eq!(ids.len(), 6);
        assert_eq!(ids, hrefs);
    }

    #[test]
    fn test_toc_anchors_match_header_ids_with_angle_brackets() {
        let result = run("## Using Vec<T> today
text
## a </h2> b
### Option<&str>");

        let id_re = Regex::new(r#"<h[1-6] id="([^"]*)">"#).unwrap();
        let ids: Vec<_> = id_re
            .captures_iter(&result.html)
            .map(|c| c[1].to_string())
            .collect();

        let href_re = Regex::new(r##"href="#([^"]*)""##).unwrap();
        let hrefs: Vec<_> = href_re
            .captures_iter(&result.toc)
            .map(|c| c[1].to_string())
            .collect();

        assert_eq!(ids, ["using-vect-today", "a-h2-b", "optionstr"]);
        assert_eq!(ids, hrefs);
    }

    #[test]
    fn test_convert_annotates_raw_html_header() {
        let result = run("<h3>Raw Header</h3>");
        assert_eq!(result.html, r#"<p><h3 id="raw-header">Raw Header</h3></p>"#);
        assert_eq!(result.toc, "");
    }

    #[test]
    fn test_convert_summary_style() {
        let source = format!("# T\n{}", "z".repeat(180));
        let post = convert(&source, &ConvertOptions::with_summary(SummaryStyle::POST));
        let recent = convert(&source, &ConvertOptions::with_summary(SummaryStyle::RECENT));
        assert!(!post.meta.summary.ends_with("..."));
        assert_eq!(recent.meta.summary.len(), 153);
    }

    #[test]
    fn test_metadata_matches_convert() {
        let source = "# Title\nSome `code` and [a link](x).";
        for style in [SummaryStyle::POST, SummaryStyle::RECENT] {
            let full = convert(source, &ConvertOptions::with_summary(style));
            assert_eq!(metadata(source, style), full.meta);
        }
    }

    #[test]
    fn test_convert_is_deterministic() {
        let source = "# A\n***x***\n* a * b\n```\ncode\n```";
        let first = run(source);
        let second = run(source);
        assert_eq!(first.html, second.html);
        assert_eq!(first.toc, second.toc);
        assert_eq!(first.meta, second.meta);
    }
}
