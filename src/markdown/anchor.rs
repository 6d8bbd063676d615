//! Header anchors.
//!
//! Markdown headings get their anchor from [`heading_anchor`] on the raw
//! heading text, both for the rendered `id` and for the table of contents.
//! [`annotate`] then covers header tags that were written as raw HTML:
//! `<hN>text</hN>` becomes `<hN id="slug">text</hN>`, slugged from the inner
//! text with tags removed.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::{inline, slug::slugify};

/// One pattern per level; each only matches its own closing tag.
static HEADERS: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        let level = i + 1;
        Regex::new(&format!(r"<h{level}>(.*?)</h{level}>")).expect("header pattern is valid")
    })
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Anchor of a markdown heading, from its raw text.
pub fn heading_anchor(raw: &str) -> String {
    slugify(&inline::plain(raw.trim(), true))
}

/// Inject an `id` attribute into every unannotated header tag of `html`.
pub fn annotate(html: &str) -> String {
    let mut out = html.to_string();

    for (i, re) in HEADERS.iter().enumerate() {
        let level = i + 1;
        if !out.contains(&format!("<h{level}>")) {
            continue;
        }
        out = re
            .replace_all(&out, |caps: &Captures<'_>| {
                let inner = &caps[1];
                let id = slugify(&inner_text(inner));
                format!("<h{level} id=\"{id}\">{inner}</h{level}>")
            })
            .into_owned();
    }

    out
}

/// Text content of an HTML fragment (tags removed).
pub fn inner_text(fragment: &str) -> String {
    TAG.replace_all(fragment, "").into_owned()
}
