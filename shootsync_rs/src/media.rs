//! Media references with placeholder fallback.
//!
//! A reference is just a path or URL. Empty references and the generated
//! `/placeholder.svg?...` URLs are valid content; they resolve to the
//! configured placeholder graphic instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default placeholder graphic served from the site root.
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder.svg";

/// Path or URL of an image attached to a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into().trim().to_string())
    }

    /// Empty reference, always rendered as the placeholder.
    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for empty references and generated placeholder URLs.
    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty() || self.0.starts_with(DEFAULT_PLACEHOLDER)
    }

    /// True when the reference points at another host.
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://") || self.0.starts_with("//")
    }

    /// The URL to put in `src`.
    ///
    /// Empty references become `placeholder`; generated placeholder URLs keep
    /// their query string so the placeholder service can label the tile.
    pub fn resolve<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.0.is_empty() { placeholder } else { &self.0 }
    }

    /// The URL to switch to after `current` failed to load, if any.
    ///
    /// Returns `None` once the placeholder itself is showing, so a broken
    /// placeholder cannot cause an error loop.
    pub fn fallback_for<'a>(current: &str, placeholder: &'a str) -> Option<&'a str> {
        if current == placeholder || current.starts_with(DEFAULT_PLACEHOLDER) {
            None
        } else {
            Some(placeholder)
        }
    }

    /// Location of a site-local reference inside an asset directory.
    ///
    /// Remote and placeholder references have no local file.
    pub fn local_path(&self, assets: &Path) -> Option<PathBuf> {
        if self.is_placeholder() || self.is_remote() {
            return None;
        }
        let relative = self.0.split(['?', '#']).next().unwrap_or_default();
        let relative = relative.trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }
        Some(assets.join(relative))
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("(none)")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for MediaRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
