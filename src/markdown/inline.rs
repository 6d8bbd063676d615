//! Inline markup substitution.
//!
//! Four ordered rules: links, bold, italic, inline code. The order is part of
//! the output format: bold must consume `**` runs before italic sees them, and
//! inline code runs last so emphasis rules never split a code span.
//!
//! Ambiguous emphasis is not repaired. `***x***` renders as
//! `<strong><em>x</strong></em>` and a lone `**` renders as `<em></em>`,
//! which is what the rule order produces.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern is valid"));
static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code pattern is valid"));

/// Render inline markup in a single line as HTML.
pub fn format(line: &str) -> String {
    let out = LINK.replace_all(line, r#"<a href="${2}">${1}</a>"#);
    let out = replace_cow(out, &BOLD, "<strong>${1}</strong>");
    let out = replace_cow(out, &ITALIC, "<em>${1}</em>");
    replace_cow(out, &CODE, "<code>${1}</code>").into_owned()
}

/// Reduce inline markup in a single line to its plain text.
///
/// Links collapse to their text and emphasis markers are dropped. Inline code
/// markers are dropped only when `strip_code` is set.
pub fn plain(line: &str, strip_code: bool) -> String {
    let out = LINK.replace_all(line, "${1}");
    let out = replace_cow(out, &BOLD, "${1}");
    let out = replace_cow(out, &ITALIC, "${1}");
    if strip_code {
        replace_cow(out, &CODE, "${1}").into_owned()
    } else {
        out.into_owned()
    }
}

/// Apply `re` to an intermediate result, keeping it borrowed when nothing matched.
fn replace_cow<'a>(input: Cow<'a, str>, re: &Regex, rep: &str) -> Cow<'a, str> {
    match input {
        Cow::Borrowed(s) => re.replace_all(s, rep),
        Cow::Owned(s) => Cow::Owned(re.replace_all(&s, rep).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_text_untouched() {
        assert_eq!(format("nothing to see"), "nothing to see");
    }

    #[test]
    fn test_format_link() {
        assert_eq!(
            format("see [docs](https://example.com) now"),
            r#"see <a href="https://example.com">docs</a> now"#
        );
    }

    #[test]
    fn test_format_multiple_links() {
        assert_eq!(
            format("[a](x) and [b](y)"),
            r#"<a href="x">a</a> and <a href="y">b</a>"#
        );
    }

    #[test]
    fn test_format_link_with_bracket_in_text_is_literal() {
        assert_eq!(format("[a]b](url)"), "[a]b](url)");
    }

    #[test]
    fn test_format_bold_and_italic() {
        assert_eq!(
            format("This is **bold** and *italic*."),
            "This is <strong>bold</strong> and <em>italic</em>."
        );
    }

    #[test]
    fn test_format_adjacent_bold_runs_do_not_merge() {
        assert_eq!(
            format("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_format_inline_code() {
        assert_eq!(format("run `cargo test`"), "run <code>cargo test</code>");
    }

    #[test]
    fn test_format_emphasis_inside_link_text() {
        assert_eq!(
            format("[**x**](u)"),
            r#"<a href="u"><strong>x</strong></a>"#
        );
    }

    // Golden outputs for ambiguous emphasis. These pin the rule order.

    #[test]
    fn test_format_triple_star_golden() {
        assert_eq!(format("***x***"), "<strong><em>x</strong></em>");
    }

    #[test]
    fn test_format_odd_single_stars_golden() {
        assert_eq!(format("a * b * c * d"), "a <em> b </em> c * d");
    }

    #[test]
    fn test_format_lone_double_star_golden() {
        assert_eq!(format("a ** b"), "a <em></em> b");
    }

    #[test]
    fn test_format_single_star_untouched() {
        assert_eq!(format("2 * 3 = 6"), "2 * 3 = 6");
    }

    #[test]
    fn test_format_emphasis_inside_code_golden() {
        assert_eq!(format("`a*b*c`"), "<code>a<em>b</em>c</code>");
    }

    #[test]
    fn test_plain_strips_markup() {
        assert_eq!(
            plain("A [link](http://x) with **bold** and *it*", true),
            "A link with bold and it"
        );
    }

    #[test]
    fn test_plain_code_markers() {
        assert_eq!(plain("use `cfg`", true), "use cfg");
        assert_eq!(plain("use `cfg`", false), "use `cfg`");
    }
}
