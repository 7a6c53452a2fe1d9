//! # shootsync
//!
//! **Site core for the ShootSync creative agency** - the content model and
//! the two bits of client behaviour the marketing site has, kept free of any
//! UI framework so they can be tested and inspected from a terminal.
//!
//! ## Features
//!
//! - **Portfolio catalog** - tagged work items and the category filter
//! - **Reveal latch** - one-shot Hidden → Visible state per content block
//! - **Contact contract** - validation of the enquiry form
//! - **Site content** - every page's copy as typed records
//! - **Config** - optional `.shootsync/config.toml`
//!
//! ## Quick Start
//!
//! ```rust
//! use shootsync::catalog::{Category, CategoryFilter};
//! use shootsync::content::portfolio_catalog;
//! use shootsync::reveal::{RevealLatch, Transition};
//!
//! let catalog = portfolio_catalog();
//! let ugc = catalog.filter(CategoryFilter::Only(Category::Ugc));
//! assert_eq!(ugc.len(), 2);
//!
//! let mut latch = RevealLatch::new();
//! assert_eq!(latch.observe(true), Transition::Revealed);
//! assert_eq!(latch.observe(false), Transition::Unchanged);
//! assert!(latch.is_visible());
//! ```
//!
//! The browser app lives in the `shootsync-landing` crate and depends on
//! this one with `default-features = false`.
//!
//! Developed by The ShootSync Team (c)2024

// ============================================================================
// Content Model
// ============================================================================

/// Portfolio items, categories and the category filter.
pub mod catalog;

/// Copy, stats, packages and FAQ for every page.
pub mod content;

/// Image references with placeholder fallback.
pub mod media;

/// The six pages and the navigation bar.
pub mod nav;

// ============================================================================
// Behaviour
// ============================================================================

/// Contact form fields and validation.
pub mod contact;

/// Reveal-on-view latch and animation timing.
pub mod reveal;

// ============================================================================
// Infrastructure
// ============================================================================

pub mod config;
pub mod error;

/// `shootsync` command-line entry point.
#[cfg(feature = "cli")]
pub mod cli;

pub use catalog::{Catalog, CatalogItem, Category, CategoryFilter, Metrics};
pub use config::SiteConfig;
pub use error::{ContentError, Result};
pub use nav::Page;
pub use reveal::{RevealLatch, RevealTiming, Visibility};
