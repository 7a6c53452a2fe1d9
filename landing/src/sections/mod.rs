// Page sections
// Developed by The ShootSync Team (c)2024

mod about;
mod contact;
mod cta;
mod faq;
mod footer;
mod hero;
mod nav;
mod packages;
mod portfolio;
mod services;
mod stats;
mod studio;

pub use about::{AboutBlurb, Story, Values};
pub use contact::{ContactDetails, ContactForm};
pub use cta::Cta;
pub use faq::FaqList;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use packages::PackageGrid;
pub use portfolio::PortfolioGrid;
pub use services::{ServiceHighlights, ServiceOfferings};
pub use stats::StatRow;
pub use studio::{StudioFeatures, StudioGallery};
