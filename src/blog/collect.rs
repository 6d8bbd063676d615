//! Post discovery.

use jwalk::WalkDir;
use std::path::{Path, PathBuf};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Markdown post extension.
pub const POST_EXTENSION: &str = "md";

/// Collect all files from a directory recursively, in path order
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect();
    files.sort();
    files
}

/// Collect every `.md` post below `dir`.
///
/// A missing directory yields no posts.
pub fn collect_posts(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    collect_all_files(dir)
        .into_iter()
        .filter(|p| is_post(p))
        .collect()
}

pub fn is_post(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == POST_EXTENSION)
}
