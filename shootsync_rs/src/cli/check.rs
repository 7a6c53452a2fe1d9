//! Content consistency checks behind `shootsync check`.

use std::collections::HashSet;
use std::path::Path;

use crate::catalog::HIGHLIGHT_COUNT;
use crate::config::SiteConfig;
use crate::content::{self, SERVICE_PACKAGES, STUDIO_PACKAGES};
use crate::nav::Page;

/// Outcome of a check run. Only violations fail the command.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub passed: Vec<String>,
    pub warnings: Vec<String>,
    pub violations: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    fn require(&mut self, ok: bool, what: impl Into<String>, problem: impl FnOnce() -> String) {
        if ok {
            self.passed.push(what.into());
        } else {
            self.violations.push(problem());
        }
    }
}

pub fn check_site(config: &SiteConfig, assets: Option<&Path>) -> CheckReport {
    let mut report = CheckReport::default();
    let catalog = content::portfolio_catalog();

    let missing = catalog.check_coverage(&catalog.filter_options());
    report.require(missing.is_empty(), "filter options cover every category", || {
        let labels: Vec<_> = missing.iter().map(|c| c.label()).collect();
        format!("no filter option for {}", labels.join(", "))
    });

    let mut seen = HashSet::new();
    let duplicates: Vec<&str> = catalog
        .items()
        .iter()
        .map(|item| item.title.as_str())
        .filter(|title| !seen.insert(*title))
        .collect();
    report.require(duplicates.is_empty(), "portfolio titles are unique", || {
        format!("duplicate portfolio titles: {}", duplicates.join(", "))
    });

    for item in catalog.items() {
        if item.metrics.len() < HIGHLIGHT_COUNT {
            report.warnings.push(format!(
                "{} has {} metric(s), card shows {}",
                item.title,
                item.metrics.len(),
                HIGHLIGHT_COUNT
            ));
        }
    }

    let empty: Vec<&str> = Page::ALL
        .into_iter()
        .filter(|page| content::outline(*page).is_empty() || content::hero(*page).emphasis.is_empty())
        .map(Page::path)
        .collect();
    report.require(empty.is_empty(), "every page has content", || {
        format!("pages without content: {}", empty.join(", "))
    });

    for (name, packages) in [("services", SERVICE_PACKAGES), ("studio", STUDIO_PACKAGES)] {
        let popular = packages.iter().filter(|p| p.popular).count();
        report.require(
            popular <= 1,
            format!("{name} packages mark at most one as popular"),
            || format!("{name} packages mark {popular} as popular"),
        );
    }

    if let Some(assets) = assets {
        check_media(config, assets, &mut report);
    }

    report
}

fn check_media(config: &SiteConfig, assets: &Path, report: &mut CheckReport) {
    let mut resolved = 0usize;
    for (place, media) in content::media_references() {
        match media.local_path(assets) {
            Some(path) if !path.is_file() => {
                tracing::debug!("missing media file {}", path.display());
                report.warnings.push(format!(
                    "{place}: {media} not found, falls back to {}",
                    config.placeholder_image
                ));
            }
            Some(_) => resolved += 1,
            None => {}
        }
    }
    report
        .passed
        .push(format!("{resolved} local media file(s) resolved under {}", assets.display()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn built_in_content_passes() {
        let report = check_site(&SiteConfig::default(), None);
        assert!(report.is_ok(), "violations: {:?}", report.violations);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_media_is_a_warning() {
        let temp = TempDir::new().expect("temp dir");
        let images = temp.path().join("images");
        std::fs::create_dir_all(&images).expect("create images");
        std::fs::write(images.join("Ecommerce.JPG"), b"jpg").expect("write image");

        let report = check_site(&SiteConfig::default(), Some(temp.path()));
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings.iter().any(|w| w.contains("Fitness.PNG")));
        assert!(report.passed.iter().any(|p| p.starts_with("1 local media")));
    }
}
