// Site-wide settings shared through context
// Developed by The ShootSync Team (c)2024

use leptos::prelude::*;
use shootsync::SiteConfig;

/// Baked into the bundle; edit `landing/site.toml` and rebuild.
const SITE_TOML: &str = include_str!("../site.toml");

pub fn load() -> SiteConfig {
    match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("site.toml rejected, using defaults: {e}");
            SiteConfig::default()
        }
    }
}

/// Config provided by `App`, or defaults when rendered outside it.
pub fn use_site() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let config = SiteConfig::from_toml_str(SITE_TOML).expect("site.toml parses");
        assert_eq!(config.brand, "shootsync.");
        assert_eq!(config.reveal.stagger_ms, 100);
    }
}
