// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Asset and page URL rewriting.
//!
//! Published builds prefix absolute paths with the site `base_url`. Local
//! preview builds point absolute paths at the build directory with
//! `file://` URLs so the pages can be opened straight from disk.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlMode {
    /// Served from `base_url` (e.g. "/" or "/devconf/")
    Site { base_url: String },
    /// Opened from disk; `root` is the absolute build directory
    Local { root: PathBuf },
}

impl UrlMode {
    pub fn site(base_url: impl Into<String>) -> Self {
        UrlMode::Site {
            base_url: base_url.into(),
        }
    }

    pub fn local(root: impl AsRef<Path>) -> Self {
        UrlMode::Local {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Rewrite `path`. Relative paths, fragments and full URLs are
    /// returned unchanged.
    pub fn rewrite(&self, path: &str) -> String {
        let path = path.trim();
        if !path.starts_with('/') || path.starts_with("//") {
            return path.to_string();
        }

        match self {
            UrlMode::Site { base_url } => prefix_with_base_url(base_url, path),
            UrlMode::Local { root } => {
                let joined = root.join(path.trim_start_matches('/'));
                format!("file://{}", joined.display())
            }
        }
    }
}

/// Prepend `base_url` to an absolute path.
///
/// A base of `/` leaves the path unchanged; `/devconf/` turns `/us/faq`
/// into `/devconf/us/faq`.
pub fn prefix_with_base_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_mode_default_base() {
        let mode = UrlMode::site("/");
        assert_eq!(mode.rewrite("/assets/build/css/site.css"), "/assets/build/css/site.css");
    }

    #[test]
    fn test_site_mode_prefixed_base() {
        let mode = UrlMode::site("/devconf/");
        assert_eq!(mode.rewrite("/us/faq.html"), "/devconf/us/faq.html");
        assert_eq!(prefix_with_base_url("/devconf", "us"), "/devconf/us");
    }

    #[test]
    fn test_local_mode_uses_file_urls() {
        let mode = UrlMode::local("/tmp/build");
        assert_eq!(
            mode.rewrite(" /assets/images/hotel.svg "),
            "file:///tmp/build/assets/images/hotel.svg"
        );
    }

    #[test]
    fn test_unchanged_paths() {
        let mode = UrlMode::local("/tmp/build");
        for path in ["#about", "mailto:info@devconf.us", "https://devconf.info", "//cdn.example/x.js", "faq.html"] {
            assert_eq!(mode.rewrite(path), path);
        }
    }
}
