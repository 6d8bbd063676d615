//! Raw markdown document.

use super::fence::{self, CodeFences, Isolated};

/// Source text of one conversion, with fenced regions already cut out.
///
/// Every consumer (block structure, table of contents, metadata) reads the
/// same fence-masked lines, so a `#` or `*` inside a code block is never seen
/// as a heading, list item or summary line.
#[derive(Debug, Clone)]
pub struct RawDocument {
    isolated: Isolated,
}

impl RawDocument {
    pub fn new(source: &str) -> Self {
        Self {
            isolated: fence::isolate(source),
        }
    }

    /// Fence-masked lines, split on `\n` only.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.isolated.text.split('\n')
    }

    pub const fn fences(&self) -> &CodeFences {
        &self.isolated.fences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_mask_fences() {
        let doc = RawDocument::new("# Title\n```\n# comment\n```\ntext");
        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "# Title");
        assert_eq!(doc.fences().placeholder_index(lines[1]), Some(0));
        assert_eq!(lines[2], "text");
        assert_eq!(doc.fences().len(), 1);
    }
}
