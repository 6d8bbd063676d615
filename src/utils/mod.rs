//! Utility modules.

pub mod date;
pub mod html;
pub mod path;

/// `1 post`, `3 posts`, `0 static files`
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
