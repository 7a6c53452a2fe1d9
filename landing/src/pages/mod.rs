// Site routes
// Developed by The ShootSync Team (c)2024

mod about;
mod contact;
mod home;
mod not_found;
mod portfolio;
mod services;
mod studio;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use portfolio::PortfolioPage;
pub use services::ServicesPage;
pub use studio::StudioPage;
