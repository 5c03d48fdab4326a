//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/docs/CSS/   ← start
/// /home/user/blog/docnav.toml ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Whether a nav link points outside the site.
///
/// Anything `url` parses as an absolute URL counts (`https:`, `mailto:`, ...),
/// as do protocol-relative links (`//cdn.example.com/x`).
/// Site paths such as `/CSS/` have no scheme and fail to parse.
pub fn is_external_link(link: &str) -> bool {
    link.starts_with("//") || url::Url::parse(link).is_ok()
}

/// Site-relative link path without query or fragment.
///
/// # Examples
/// ```ignore
/// link_path("/CSS/flex#grid")  -> Some("/CSS/flex")
/// link_path("/Git/?tab=1")     -> Some("/Git/")
/// link_path("https://x.com/")  -> None
/// ```
pub fn link_path(link: &str) -> Option<&str> {
    if is_external_link(link) {
        return None;
    }
    let end = link.find(['?', '#']).unwrap_or(link.len());
    Some(&link[..end])
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://github.com/Chenyuanyuan299"));
        assert!(is_external_link("http://localhost:8080/"));
        assert!(is_external_link("mailto:me@example.com"));
        assert!(is_external_link("//cdn.example.com/x"));
        assert!(!is_external_link("/accumulate/"));
        assert!(!is_external_link("guide/intro"));
        assert!(!is_external_link("/"));
    }

    #[test]
    fn test_link_path() {
        assert_eq!(link_path("/CSS/flex#grid"), Some("/CSS/flex"));
        assert_eq!(link_path("/Git/?tab=1"), Some("/Git/"));
        assert_eq!(link_path("/algorithm/"), Some("/algorithm/"));
        assert_eq!(link_path("https://example.com/CSS/"), None);
        assert_eq!(link_path("//cdn.example.com/CSS/"), None);
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs").join("CSS");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("docnav.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("docnav.toml")).unwrap();
        assert_eq!(found, dir.path().join("docnav.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_file(dir.path(), Path::new("no-such-docnav-config.toml")).is_none());
    }
}
