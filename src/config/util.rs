//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// How a navigation link resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Site-relative path, e.g. `/about/`.
    Internal,
    /// Absolute URL, e.g. `https://github.com/alice`.
    External,
    /// Neither of the above.
    Invalid,
}

/// Classify a navigation link target.
///
/// Uses `url` crate for absolute URLs. Only `http(s)` with a host and
/// `mailto:` count as external; `javascript:` and other schemes are invalid.
///
/// # Examples
/// ```ignore
/// classify_link("/about/")                 -> Internal
/// classify_link("https://github.com/a")    -> External
/// classify_link("mailto:me@example.com")   -> External
/// classify_link("javascript:alert(1)")     -> Invalid
/// classify_link("about/")                  -> Invalid
/// classify_link("")                        -> Invalid
/// ```
pub fn classify_link(link: &str) -> LinkKind {
    if link.starts_with('/') && !link.starts_with("//") {
        return LinkKind::Internal;
    }

    match url::Url::parse(link) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
            if parsed.host_str().is_some_and(|h| !h.is_empty()) {
                LinkKind::External
            } else {
                LinkKind::Invalid
            }
        }
        Ok(parsed) if parsed.scheme() == "mailto" => LinkKind::External,
        _ => LinkKind::Invalid,
    }
}

/// Join a site-relative path onto the configured base.
///
/// ```ignore
/// join_base("/", "/about/")      -> "/about/"
/// join_base("/blog/", "/about/") -> "/blog/about/"
/// join_base("/blog/", "about")   -> "/blog/about"
/// ```
pub fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Find a config file by searching upward from `start`.
///
/// In each directory the candidate names are tried in order; the first
/// existing file wins.
///
/// # Example
/// ```text
/// /home/user/blog/posts/2020/  ← start
/// /home/user/blog/site.toml    ← found!
/// ```
pub fn find_config_file(start: &Path, names: &[&str]) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        for name in names {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        current = dir.parent();
    }
    None
}

// ============================================================================
// tests
// ============================================================================
