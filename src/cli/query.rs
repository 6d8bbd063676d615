//! Query command implementation.
//!
//! Extracts post metadata in batch, without rendering bodies, and prints it
//! as a JSON array in index order.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::common::collect_post_files;
use crate::blog::{PostEntry, post::PostSource};
use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::debug;
use crate::utils::plural_count;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let files = collect_post_files(&args.paths, &config.build.content)?;
    debug!("query"; "querying {}", plural_count(files.len(), "post"));

    let entries = query_posts(&files, config)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Summarize posts in parallel, newest first, with root-relative sources
fn query_posts(files: &[PathBuf], config: &SiteConfig) -> Result<Vec<PostEntry>> {
    let mut entries = files
        .par_iter()
        .map(|path| -> Result<PostEntry> {
            let source = PostSource::read(path, &config.build.content)
                .with_context(|| format!("Failed to query {}", path.display()))?;
            let mut entry = source.summarize(&config.summary);
            entry.source = config.root_relative(&entry.source);
            Ok(entry)
        })
        .collect::<Result<Vec<_>>>()?;

    PostEntry::sort(&mut entries);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn site() -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let mut config = SiteConfig {
            root: root.clone(),
            ..SiteConfig::default()
        };
        config.build.normalize(&root);
        (dir, config)
    }

    fn write(content: &Path, rel: &str, markdown: &str) -> PathBuf {
        let path = content.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, markdown).unwrap();
        path
    }

    #[test]
    fn test_query_posts_sorted() {
        let (_dir, config) = site();
        let content = &config.build.content;
        let files = vec![
            write(content, "2023/05/01/old.md", "# Old\nfirst"),
            write(content, "2024/05/01/new.md", "# New\nsecond"),
        ];

        let entries = query_posts(&files, &config).unwrap();
        assert_eq!(entries[0].title, "New");
        assert_eq!(entries[0].source, PathBuf::from("src/blog/2024/05/01/new.md"));
        assert_eq!(entries[1].summary, "first");
    }

    #[test]
    fn test_query_json_shape() {
        let (_dir, config) = site();
        let files = vec![write(&config.build.content, "2024/01/02/a.md", "# A\ntext")];

        let entries = query_posts(&files, &config).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&entries).unwrap()).unwrap();
        let post = &json[0];
        assert_eq!(post["url"], "2024/01/02/a.html");
        assert_eq!(post["date"], "2024-01-02");
        assert_eq!(post["date_display"], "January 2, 2024");
        assert_eq!(post["published"], "2024-01-02T00:00:00Z");
    }

    #[test]
    fn test_query_outside_content_fails() {
        let (dir, config) = site();
        let stray = write(dir.path(), "stray.md", "# S");
        assert!(query_posts(&[stray], &config).is_err());
    }
}
