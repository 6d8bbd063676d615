//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::blog::collect::{collect_posts, is_post};
use crate::utils::path::resolve_path;

/// Collect posts based on CLI paths
///
/// No paths means every post under `content_dir`; a single `-` reads the
/// paths from stdin.
pub fn collect_post_files(paths: &[PathBuf], content_dir: &Path) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin(io::stdin().lock())?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        return Ok(collect_posts(content_dir));
    }

    let mut all_files = Vec::new();
    for path in &paths {
        let resolved = resolve_path(path, content_dir);

        if resolved.is_file() {
            if !is_post(&resolved) {
                bail!("Not a markdown post: {}", path.display());
            }
            all_files.push(resolved);
        } else if resolved.is_dir() {
            all_files.extend(collect_posts(&resolved));
        } else {
            bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                content_dir.join(path).display()
            );
        }
    }

    all_files.sort();
    all_files.dedup();
    Ok(all_files)
}

/// Read file paths, one per line, skipping blank lines
pub fn read_paths_from_stdin(input: impl BufRead) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}
