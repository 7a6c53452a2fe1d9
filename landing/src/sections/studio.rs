use leptos::prelude::*;
use shootsync::content::{FeatureIcon, STUDIO_FEATURES, STUDIO_GALLERY};
use shootsync::reveal::Motion;

use crate::components::{MediaImage, Reveal};

#[component]
pub fn StudioFeatures() -> impl IntoView {
    view! {
        <section class="studio-features">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"STUDIO " <span class="section-emphasis">"FEATURES"</span></h2>
                    <p class="section-description">
                        "Everything you need for professional content creation in one convenient location."
                    </p>
                </Reveal>
                <div class="feature-grid">
                    {STUDIO_FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! {
                            <Reveal index=index motion=Some(Motion::Rise(50)) class="feature-card">
                                <span class="feature-icon" aria-hidden="true">{icon_glyph(feature.icon)}</span>
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="feature-description">{feature.description}</p>
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn StudioGallery() -> impl IntoView {
    view! {
        <section class="studio-gallery">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"STUDIO " <span class="section-emphasis">"GALLERY"</span></h2>
                </Reveal>
                <div class="gallery-grid">
                    {STUDIO_GALLERY
                        .iter()
                        .enumerate()
                        .map(|(index, tile)| view! {
                            <Reveal index=index motion=Some(Motion::Grow(0.8)) class="gallery-tile">
                                <MediaImage media=tile.media alt=tile.alt />
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn icon_glyph(icon: FeatureIcon) -> &'static str {
    match icon {
        FeatureIcon::Camera => "📷",
        FeatureIcon::Video => "🎥",
        FeatureIcon::Mic => "🎙",
        FeatureIcon::Lightbulb => "💡",
        FeatureIcon::Wifi => "📶",
        FeatureIcon::Coffee => "☕",
        FeatureIcon::Car => "🚗",
        FeatureIcon::Users => "👥",
    }
}
