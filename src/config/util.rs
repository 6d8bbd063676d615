//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find `config_name` in `start` or the closest ancestor holding it.
///
/// An absolute `config_name` is used as is.
///
/// # Example
/// ```text
/// /home/user/site/src/blog/2024/  ← start
/// /home/user/site/quire.toml      ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_start_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("quire.toml"), "").unwrap();

        let found = find_config_file(dir.path(), Path::new("quire.toml"));
        assert_eq!(found, Some(dir.path().join("quire.toml")));
    }

    #[test]
    fn test_find_config_searches_upward() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("quire.toml"), "").unwrap();
        let nested = dir.path().join("src/blog/2024");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(&nested, Path::new("quire.toml"));
        assert_eq!(found, Some(dir.path().join("quire.toml")));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("site.toml")).unwrap();
        assert!(find_config_file(dir.path(), Path::new("site.toml")).is_none());
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(find_config_file(Path::new("/"), &path).is_none());

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path));
    }
}
