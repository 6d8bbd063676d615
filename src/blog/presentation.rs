//! Talks listed on the main page.
//!
//! Read from `presentations.toml` in the templates directory:
//!
//! ```toml
//! [[presentations]]
//! title = "Fearless Concurrency"
//! thumbnail = "img/talk.png"
//! thumbnail_alt = "Title slide"
//! summary = "Threads, channels and the borrow checker."
//! download_url = "slides/talk.pdf"
//! download_format = "PDF"
//! ```
//!
//! `title` and `summary` are inserted as HTML, attribute values are escaped.

use super::BlogError;
use crate::{log, utils::html::escape_attr};
use serde::Deserialize;
use std::{fs, io::ErrorKind, path::Path};

pub const PRESENTATIONS_FILE: &str = "presentations.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Presentation {
    pub title: String,
    pub thumbnail: String,
    pub thumbnail_alt: String,
    pub summary: String,
    pub download_url: String,
    pub download_format: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PresentationsFile {
    presentations: Vec<Presentation>,
}

/// Presentations listed in `dir/presentations.toml`. Empty without the file.
pub fn load(dir: &Path) -> Result<Vec<Presentation>, BlogError> {
    let path = dir.join(PRESENTATIONS_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(BlogError::Read(path, e)),
    };
    toml::from_str::<PresentationsFile>(&content)
        .map(|file| file.presentations)
        .map_err(|e| BlogError::Presentations(path, e))
}

/// Like [`load`], but a broken file is reported and treated as empty.
pub fn load_or_default(dir: &Path) -> Vec<Presentation> {
    load(dir).unwrap_or_else(|e| {
        log!("warning"; "{:#}", anyhow::Error::from(e));
        Vec::new()
    })
}

/// `{{PRESENTATIONS}}` fragment, `""` without presentations.
pub fn presentations_html(presentations: &[Presentation]) -> String {
    presentations
        .iter()
        .map(|p| {
            format!(
                "      <div class=\"presentation\">
        <div class=\"thumbnail\">
          <img src=\"{}\" alt=\"{}\" />
        </div>
        <div class=\"description\">
          <h1>{}</h1>
          <div class=\"summary\">
            {}
          </div>
          <div class=\"download-link\">
            <a href=\"{}\">Download</a> ({})
          </div>
        </div>
      </div>",
                escape_attr(&p.thumbnail),
                escape_attr(&p.thumbnail_alt),
                p.title,
                p.summary,
                escape_attr(&p.download_url),
                p.download_format
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_entries_in_order() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(PRESENTATIONS_FILE),
            r#"
[[presentations]]
title = "First"
download_url = "first.pdf"
download_format = "PDF"

[[presentations]]
title = "Second"
"#,
        )
        .unwrap();

        let list = load(dir.path()).unwrap();
        let titles: Vec<_> = list.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
        assert_eq!(list[0].download_format, "PDF");
        assert_eq!(list[1].download_url, "");
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PRESENTATIONS_FILE), "[[presentations]\n").unwrap();

        assert!(matches!(load(dir.path()), Err(BlogError::Presentations(..))));
        assert!(load_or_default(dir.path()).is_empty());
    }

    #[test]
    fn test_presentations_html_empty() {
        assert_eq!(presentations_html(&[]), "");
    }

    #[test]
    fn test_presentations_html() {
        let talk = Presentation {
            title: "Talk".into(),
            thumbnail: "img/talk.png".into(),
            thumbnail_alt: "Slide \"one\"".into(),
            summary: "About <em>things</em>".into(),
            download_url: "talk.pdf".into(),
            download_format: "PDF".into(),
        };

        let html = presentations_html(&[talk.clone(), talk]);
        assert_eq!(html.matches("<div class=\"presentation\">").count(), 2);
        assert!(html.contains("<img src=\"img/talk.png\" alt=\"Slide &quot;one&quot;\" />"));
        assert!(html.contains("<h1>Talk</h1>"));
        assert!(html.contains("            About <em>things</em>\n"));
        assert!(html.contains("<a href=\"talk.pdf\">Download</a> (PDF)"));
    }
}
