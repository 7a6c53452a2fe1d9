//! Portfolio catalog and category filter.
//!
//! The catalog is a fixed, ordered list of [`CatalogItem`]s. A
//! [`CategoryFilter`] selects the visible subset: either everything (the
//! `ALL` sentinel) or the items of exactly one [`Category`]. Filtering is
//! stable and never fails; a category without members yields an empty list.
//!
//! # Example
//!
//! ```rust
//! use shootsync::catalog::{Category, CategoryFilter};
//! use shootsync::content::portfolio_catalog;
//!
//! let catalog = portfolio_catalog();
//! let commercial = catalog.filter(CategoryFilter::Only(Category::Commercial));
//! assert_eq!(commercial.len(), 2);
//! assert_eq!(catalog.filter(CategoryFilter::All).len(), catalog.len());
//! ```

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{ContentError, Result};
use crate::media::MediaRef;

/// Number of metrics shown on a card's info overlay.
pub const HIGHLIGHT_COUNT: usize = 2;

/// Portfolio category. Every catalog item carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Commercial,
    Ugc,
    Branding,
    Performance,
    Digital,
}

impl Category {
    /// All categories in the order the filter row shows them.
    pub const ALL: [Category; 5] = [
        Category::Commercial,
        Category::Ugc,
        Category::Branding,
        Category::Performance,
        Category::Digital,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Commercial => "COMMERCIAL",
            Category::Ugc => "UGC",
            Category::Branding => "BRANDING",
            Category::Performance => "PERFORMANCE",
            Category::Digital => "DIGITAL",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ContentError::UnknownCategory(s.to_string()))
    }
}

/// Current selection of the portfolio filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// The `ALL` sentinel: no filter applied.
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "ALL";

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Insertion-ordered `label -> value` pairs, e.g. `views -> 2.5M`.
///
/// Serialized as a map whose key order is preserved in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics(Vec<(String, String)>);

impl Metrics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a pair. A repeated label replaces the earlier value in place.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut metrics = Metrics::new();
        for (label, value) in iter {
            metrics.push(label, value);
        }
        metrics
    }
}

impl Serialize for Metrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Metrics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MetricsVisitor;

        impl<'de> Visitor<'de> for MetricsVisitor {
            type Value = Metrics;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of metric labels to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Metrics, A::Error> {
                let mut metrics = Metrics::new();
                while let Some((label, value)) = access.next_entry::<String, String>()? {
                    metrics.push(label, value);
                }
                Ok(metrics)
            }
        }

        deserializer.deserialize_map(MetricsVisitor)
    }
}

/// A single portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub media: MediaRef,
    #[serde(default)]
    pub metrics: Metrics,
    pub year: String,
}

impl CatalogItem {
    /// Build an item from a raw category label.
    ///
    /// Labels outside the fixed set are rejected here, so a typo can never
    /// produce an item that no filter selects.
    pub fn new(
        title: impl Into<String>,
        category: &str,
        description: impl Into<String>,
        media: impl Into<MediaRef>,
        metrics: Metrics,
        year: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            title: title.into(),
            category: category.parse()?,
            description: description.into(),
            media: media.into(),
            metrics,
            year: year.into(),
        })
    }

    /// Metrics shown on the card overlay: the first two, in insertion order.
    pub fn highlights(&self) -> &[(String, String)] {
        let entries = self.metrics.entries();
        &entries[..entries.len().min(HIGHLIGHT_COUNT)]
    }
}

/// Ordered, immutable collection of portfolio items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items visible under `filter`, in catalog order.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }

    /// Options for the filter row: `ALL` followed by every category.
    pub fn filter_options(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Distinct categories present in the catalog, in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category);
            }
        }
        seen
    }

    /// Catalog categories that no entry of `options` can select.
    ///
    /// Empty when the option list covers the catalog.
    pub fn check_coverage(&self, options: &[CategoryFilter]) -> Vec<Category> {
        self.categories()
            .into_iter()
            .filter(|category| !options.contains(&CategoryFilter::Only(*category)))
            .collect()
    }

    /// Number of items per filter option, for labelling the filter row.
    pub fn counts(&self) -> Vec<(CategoryFilter, usize)> {
        self.filter_options()
            .into_iter()
            .map(|option| (option, self.filter(option).len()))
            .collect()
    }
}
