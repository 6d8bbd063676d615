//! Filesystem path resolution for config values and CLI arguments.

use std::path::{Path, PathBuf};

/// Absolute form of `path`.
///
/// Canonical when the path exists; otherwise joined onto the working
/// directory, so paths that are yet to be created (the output directory)
/// still compare equal across calls.
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// A user-supplied path, taken as given when it is absolute or exists
/// relative to the working directory, and looked up under `fallback_dir`
/// otherwise.
///
/// ```ignore
/// // `quire query 2024/03` from the site root
/// let dir = resolve_path(Path::new("2024/03"), &config.build.content);
/// ```
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    let candidate = if path.is_absolute() || path.exists() {
        path.to_path_buf()
    } else {
        fallback_dir.join(path)
    };
    normalize_path(&candidate)
}
