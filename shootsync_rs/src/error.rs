//! Error types for content construction and configuration.

use thiserror::Error;

/// Errors raised while building or parsing site content.
///
/// Everything here is a construction-time failure: once content exists it
/// is valid, so filtering and rendering never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A catalog category label outside the fixed set.
    #[error("unknown category `{0}` (expected one of ALL, COMMERCIAL, UGC, BRANDING, PERFORMANCE, DIGITAL)")]
    UnknownCategory(String),

    /// A path that is not part of the navigation surface.
    #[error("unknown page `{0}`")]
    UnknownPage(String),

    /// A contact-form service option that is not offered.
    #[error("unknown service `{0}`")]
    UnknownService(String),

    /// A contact-form budget band that is not offered.
    #[error("unknown budget range `{0}`")]
    UnknownBudget(String),

    /// Configuration text that could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ContentError>;
