// Reusable building blocks
// Developed by The ShootSync Team (c)2024

mod media;
mod reveal;

pub use media::MediaImage;
pub use reveal::Reveal;
