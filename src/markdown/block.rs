//! Block structure: headers, paragraphs, bullet lists, code placeholders.
//!
//! Structure is decided on the raw line, before inline formatting, so a
//! rendered line is never re-inspected to find out what it was. Inline
//! markup is then applied to the content part of each line only (a list
//! marker `* ` is never read as an italic opener).

use super::{anchor::heading_anchor, fence::CodeFences, inline};

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#`×level heading, inline-formatted text, anchor from the raw text.
    Header {
        level: u8,
        text: String,
        anchor: String,
    },
    /// Any other non-blank line, inline-formatted and untrimmed.
    Paragraph(String),
    /// Run of consecutive `* ` items, each inline-formatted.
    List(Vec<String>),
    /// Placeholder for the fence at this index.
    CodePlaceholder(usize),
    /// Empty separator line.
    Blank,
}

/// Heading level and text if `line` is `#`×1..=6, a space, then text.
///
/// The marker must start the line. Seven or more hashes are not a heading.
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    Some((u8::try_from(hashes).ok()?, text))
}

/// Group fence-masked lines into blocks.
pub fn structure<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    fences: &CodeFences,
) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut list: Option<Vec<String>> = None;

    for line in lines {
        let trimmed = line.trim();

        if let Some(item) = trimmed.strip_prefix("* ") {
            list.get_or_insert_with(Vec::new).push(inline::format(item));
            continue;
        }

        // Anything that is not a list item ends the open list.
        if let Some(items) = list.take() {
            blocks.push(Block::List(items));
        }

        let block = if let Some(index) = fences.placeholder_index(trimmed) {
            Block::CodePlaceholder(index)
        } else if trimmed.is_empty() {
            Block::Blank
        } else if let Some((level, text)) = parse_heading(line) {
            Block::Header {
                level,
                text: inline::format(text),
                anchor: heading_anchor(text),
            }
        } else {
            Block::Paragraph(inline::format(line))
        };
        blocks.push(block);
    }

    if let Some(items) = list {
        blocks.push(Block::List(items));
    }

    blocks
}

/// Render blocks as HTML, one output line per source line plus list tags.
///
/// Code placeholders are emitted as-is for a later restore pass.
pub fn render(blocks: &[Block], fences: &CodeFences) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            Block::Header {
                level,
                text,
                anchor,
            } => lines.push(format!("<h{level} id=\"{anchor}\">{text}</h{level}>")),
            Block::Paragraph(text) => lines.push(format!("<p>{text}</p>")),
            Block::List(items) => {
                lines.push("<ul>".into());
                lines.extend(items.iter().map(|item| format!("<li>{item}</li>")));
                lines.push("</ul>".into());
            }
            Block::CodePlaceholder(index) => lines.push(fences.placeholder(*index)),
            Block::Blank => lines.push(String::new()),
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_str(text: &str) -> String {
        let fences = CodeFences::default();
        render(&structure(text.split('\n'), &fences), &fences)
    }

    #[test]
    fn test_parse_heading_levels() {
        assert_eq!(parse_heading("# One"), Some((1, "One")));
        assert_eq!(parse_heading("### Three"), Some((3, "Three")));
        assert_eq!(parse_heading("###### Six"), Some((6, "Six")));
    }

    #[test]
    fn test_parse_heading_rejects() {
        assert_eq!(parse_heading("####### Seven"), None);
        assert_eq!(parse_heading("#NoSpace"), None);
        assert_eq!(parse_heading(" # Indented"), None);
        assert_eq!(parse_heading("plain"), None);
        assert_eq!(parse_heading("#"), None);
    }

    #[test]
    fn test_parse_heading_empty_text() {
        assert_eq!(parse_heading("# "), Some((1, "")));
    }

    #[test]
    fn test_structure_header_levels_not_confused() {
        let blocks = structure(["### Deep", "## Mid"], &CodeFences::default());
        assert_eq!(
            blocks,
            vec![
                Block::Header {
                    level: 3,
                    text: "Deep".into(),
                    anchor: "deep".into(),
                },
                Block::Header {
                    level: 2,
                    text: "Mid".into(),
                    anchor: "mid".into(),
                },
            ]
        );
    }

    #[test]
    fn test_render_list_then_paragraph() {
        assert_eq!(
            render_str("* one\n* two\n\nthree"),
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n\n<p>three</p>"
        );
    }

    #[test]
    fn test_render_consecutive_items_share_one_list() {
        let html = render_str("* a\n* b\n* c");
        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("<li>").count(), 3);
    }

    #[test]
    fn test_render_blank_line_splits_lists() {
        let html = render_str("* a\n\n* b");
        assert_eq!(html.matches("<ul>").count(), 2);
        assert_eq!(html.matches("</ul>").count(), 2);
    }

    #[test]
    fn test_render_paragraph_splits_lists() {
        assert_eq!(
            render_str("* a\ntext\n* b"),
            "<ul>\n<li>a</li>\n</ul>\n<p>text</p>\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_render_list_closed_at_end() {
        assert!(render_str("intro\n* last").ends_with("<li>last</li>\n</ul>"));
    }

    #[test]
    fn test_render_indented_list_item() {
        assert_eq!(render_str("   * spaced"), "<ul>\n<li>spaced</li>\n</ul>");
    }

    #[test]
    fn test_render_list_item_emphasis() {
        assert_eq!(
            render_str("* *one* and **two**"),
            "<ul>\n<li><em>one</em> and <strong>two</strong></li>\n</ul>"
        );
    }

    #[test]
    fn test_render_star_without_space_is_paragraph() {
        assert_eq!(render_str("*word* here"), "<p><em>word</em> here</p>");
    }

    #[test]
    fn test_render_paragraph_keeps_leading_whitespace() {
        assert_eq!(render_str("  indented"), "<p>  indented</p>");
    }

    #[test]
    fn test_render_blank_lines_preserved() {
        assert_eq!(render_str("a\n\n\nb"), "<p>a</p>\n\n\n<p>b</p>");
        assert_eq!(render_str("a\n   \nb"), "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn test_render_header_not_wrapped() {
        assert_eq!(
            render_str("# Title\ntext"),
            "<h1 id=\"title\">Title</h1>\n<p>text</p>"
        );
    }

    #[test]
    fn test_render_header_inline_formatting() {
        assert_eq!(
            render_str("## A **b**"),
            "<h2 id=\"a-b\">A <strong>b</strong></h2>"
        );
    }

    #[test]
    fn test_render_placeholder_closes_list() {
        let fences = CodeFences::default();
        let text = format!("* a\n{}\n* b", fences.placeholder(0));
        let blocks = structure(text.split('\n'), &fences);
        assert_eq!(
            blocks,
            vec![
                Block::List(vec!["a".into()]),
                Block::CodePlaceholder(0),
                Block::List(vec!["b".into()]),
            ]
        );
    }

    #[test]
    fn test_render_raw_html_line_is_wrapped() {
        assert_eq!(render_str("<hr>"), "<p><hr></p>");
    }
}
