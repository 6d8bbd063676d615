//! Heading anchor slugs.
//!
//! The table of contents and the header annotator both derive anchors through
//! [`slugify`], so a heading's link target and its `id` cannot drift apart.

/// Generate an anchor slug from heading text.
///
/// Lowercases, drops everything that is not a word character, whitespace or
/// hyphen, collapses whitespace/hyphen runs into a single `-`, and trims
/// hyphens at both ends. Word characters are Unicode alphanumerics and `_`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
/// assert_eq!(slugify("snake_case"), "snake_case");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut separator = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '-' {
            separator = true;
        } else if is_word_char(c) {
            if separator && !slug.is_empty() {
                slug.push('-');
            }
            separator = false;
            slug.push(c);
        }
        // Stripped characters neither emit nor break a separator run.
    }

    slug
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Hello"), "hello");
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("a ! b"), "a-b");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("Hello   World"), "hello-world");
        assert_eq!(slugify("hello--world"), "hello-world");
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("tab\tseparated"), "tab-separated");
    }

    #[test]
    fn test_slugify_trims_hyphens() {
        assert_eq!(slugify("-hello-"), "hello");
        assert_eq!(slugify("  Hello World  "), "hello-world");
    }

    #[test]
    fn test_slugify_keeps_underscores_and_digits() {
        assert_eq!(slugify("snake_case"), "snake_case");
        assert_eq!(slugify("Chapter 1"), "chapter-1");
    }

    #[test]
    fn test_slugify_unicode_letters() {
        assert_eq!(slugify("Café Menü"), "café-menü");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_is_fixed_point() {
        for input in [
            "Hello, World!",
            "  Leading and trailing  ",
            "Mixed -- separators\tand  spaces",
            "snake_case and Chapter 1",
            "<strong>tags</strong> & entities",
            "Café Menü",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not a fixed point for {input:?}");
        }
    }
}
