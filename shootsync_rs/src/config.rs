//! Site configuration.
//!
//! Loads optional `.shootsync/config.toml` from the site root. Every key is
//! optional; missing keys keep the built-in values.
//!
//! ```toml
//! brand = "shootsync."
//! form_endpoint = "https://formspree.io/f/xyz"
//!
//! [reveal]
//! duration_ms = 600
//! stagger_ms = 100
//! offset_px = 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::content::{BRAND, COPYRIGHT};
use crate::error::{ContentError, Result};
use crate::media::DEFAULT_PLACEHOLDER;
use crate::reveal::{self, Motion, RevealTiming};

pub const CONFIG_DIR: &str = ".shootsync";
pub const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Wordmark shown in the navigation bar and footer.
    pub brand: String,
    pub copyright: String,
    /// External form service the contact form posts to. Unset means the
    /// form only validates and points visitors at `contact_email`.
    pub form_endpoint: Option<String>,
    pub contact_email: String,
    /// Image shown when a media reference is missing or fails to load.
    pub placeholder_image: String,
    pub reveal: RevealConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: BRAND.to_string(),
            copyright: COPYRIGHT.to_string(),
            form_endpoint: None,
            contact_email: "hello@shootsync.com".to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER.to_string(),
            reveal: RevealConfig::default(),
        }
    }
}

/// Reveal animation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub duration_ms: u32,
    /// Delay added per grid position.
    pub stagger_ms: u32,
    /// How far below its resting place a hidden block starts.
    pub offset_px: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: reveal::DEFAULT_DURATION_MS,
            stagger_ms: reveal::DEFAULT_STAGGER_MS,
            offset_px: reveal::DEFAULT_OFFSET_PX,
        }
    }
}

impl RevealConfig {
    /// Timing for a block at `index` in its group (0 for standalone blocks).
    pub fn timing(&self, index: usize) -> RevealTiming {
        RevealTiming::staggered(index, self.stagger_ms)
            .with_duration(self.duration_ms)
            .with_motion(Motion::Rise(self.offset_px))
    }
}

impl SiteConfig {
    /// Load config from `.shootsync/config.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ContentError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.brand.trim().is_empty() {
            return Err(ContentError::Config("brand must not be empty".into()));
        }
        if let Some(endpoint) = &self.form_endpoint {
            if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
                return Err(ContentError::Config(format!(
                    "form_endpoint must be an http(s) URL, got {endpoint:?}"
                )));
            }
        }
        if self.reveal.duration_ms == 0 {
            return Err(ContentError::Config(
                "reveal.duration_ms must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Whether the contact form has somewhere to post to.
    pub fn accepts_submissions(&self) -> bool {
        self.form_endpoint.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.brand, "shootsync.");
        assert_eq!(config.copyright, "© 2024 ShootSync. All rights reserved.");
        assert_eq!(config.reveal.duration_ms, 600);
        assert!(!config.accepts_submissions());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).expect("create .shootsync");

        let mut file = std::fs::File::create(dir.join(CONFIG_FILE)).expect("create config");
        writeln!(
            file,
            r#"
form_endpoint = "https://forms.example.com/f/abc"

[reveal]
stagger_ms = 150
"#
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path());
        assert!(config.accepts_submissions());
        assert_eq!(config.reveal.stagger_ms, 150);
        assert_eq!(config.reveal.duration_ms, 600);
        assert_eq!(config.brand, "shootsync.");
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "form_endpoint = \"mailto:someone\"\n").expect("write config");

        assert_eq!(SiteConfig::load_from_path(&path), SiteConfig::default());
        assert!(SiteConfig::from_toml_str("form_endpoint = \"mailto:someone\"").is_err());
        assert!(SiteConfig::from_toml_str("brand = 3").is_err());
    }

    #[test]
    fn test_reveal_timing_from_config() {
        let reveal = RevealConfig {
            duration_ms: 800,
            stagger_ms: 50,
            offset_px: 20,
        };
        let timing = reveal.timing(4);
        assert_eq!(timing.duration_ms, 800);
        assert_eq!(timing.delay_ms, 200);
        assert_eq!(timing.motion, Motion::Rise(20));
    }
}
