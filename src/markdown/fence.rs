//! Fenced code block isolation.
//!
//! Fenced regions are cut out of the source before any other rule runs and
//! replaced by an opaque placeholder line. The placeholder is delimited by
//! private-use code points, which no markdown rule produces or consumes, so
//! header, link, emphasis and inline-code substitution all pass over it.
//!
//! Each document picks a placeholder tag whose opener does not occur in its
//! source, so authored text can never be mistaken for a placeholder.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Opening delimiter of a placeholder token.
const TOKEN_OPEN: char = '\u{E000}';
/// Closing delimiter of a placeholder token.
const TOKEN_CLOSE: char = '\u{E001}';

/// Opening fence line (with optional info string), a body, and the first
/// closing fence line that follows it.
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^```([^\n`]*)\n(.*?)\n```[ \t]*$").expect("fence pattern is valid")
});

const TAG_BASE: &str = "fence";

/// Code fragments captured from one document, indexed by capture order.
#[derive(Debug, Clone)]
pub struct CodeFences {
    tag: String,
    fragments: Vec<String>,
}

impl Default for CodeFences {
    fn default() -> Self {
        Self::for_source("")
    }
}

/// Source text with every terminated fence replaced by its placeholder.
#[derive(Debug, Clone)]
pub struct Isolated {
    pub text: String,
    pub fences: CodeFences,
}

/// Cut every terminated fence out of `source`.
///
/// An unterminated fence never matches, so its marker survives as ordinary
/// text for the later passes.
pub fn isolate(source: &str) -> Isolated {
    let mut fences = CodeFences::for_source(source);

    let text = FENCE
        .replace_all(source, |caps: &Captures<'_>| {
            let lang = caps[1].trim();
            let body = &caps[2];
            fences.push(lang, body)
        })
        .into_owned();

    Isolated { text, fences }
}

impl CodeFences {
    /// Empty table whose placeholders cannot occur in `source`.
    fn for_source(source: &str) -> Self {
        let tag = (0..)
            .map(|n| match n {
                0 => TAG_BASE.to_string(),
                n => format!("{TAG_BASE}{n}"),
            })
            .find(|tag| !source.contains(&format!("{TOKEN_OPEN}{tag}:")))
            .unwrap_or_default();
        Self {
            tag,
            fragments: Vec::new(),
        }
    }

    /// Store a fragment and return the placeholder that stands in for it.
    fn push(&mut self, lang: &str, body: &str) -> String {
        let fragment = if lang.is_empty() {
            format!("<pre><code>{body}</code></pre>")
        } else {
            format!("<pre><code class=\"language-{lang}\">{body}</code></pre>")
        };
        let index = self.fragments.len();
        self.fragments.push(fragment);
        self.placeholder(index)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Replace every placeholder in `html` with its fragment, in index order.
    pub fn restore(&self, html: &str) -> String {
        let mut out = html.to_string();
        for (index, fragment) in self.fragments.iter().enumerate() {
            out = out.replace(&self.placeholder(index), fragment);
        }
        out
    }

    /// Placeholder token for fence `index`.
    pub fn placeholder(&self, index: usize) -> String {
        format!("{TOKEN_OPEN}{}:{index}{TOKEN_CLOSE}", self.tag)
    }

    /// Fence index if `line` is exactly one of this document's placeholders.
    pub fn placeholder_index(&self, line: &str) -> Option<usize> {
        line.strip_prefix(TOKEN_OPEN)?
            .strip_suffix(TOKEN_CLOSE)?
            .strip_prefix(self.tag.as_str())?
            .strip_prefix(':')?
            .parse()
            .ok()
    }
}
