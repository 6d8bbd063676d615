//! HTML escaping for text and attribute values.

use std::borrow::Cow;

fn entity(c: char) -> Option<&'static str> {
    Some(match c {
        '&' => "&amp;",
        '<' => "&lt;",
        '>' => "&gt;",
        '"' => "&quot;",
        '\'' => "&#39;",
        _ => return None,
    })
}

/// Escape `& < > " '`, borrowing the input when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c| entity(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match entity(c) {
            Some(e) => out.push_str(e),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape a value placed inside a quoted attribute.
///
/// Both quote styles are escaped, so the same set as [`escape`] suffices.
#[inline]
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    escape(value)
}
