use crate::components::Reveal;
use crate::sections::{Cta, Hero, PackageGrid, StudioFeatures, StudioGallery};
use leptos::prelude::*;
use shootsync::content::{STUDIO_CTA, STUDIO_HERO, STUDIO_PACKAGES};
use shootsync::reveal::Motion;

#[component]
pub fn StudioPage() -> impl IntoView {
    view! {
        <Hero hero=&STUDIO_HERO />
        <StudioFeatures />
        <section class="packages">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"RENTAL " <span class="section-emphasis">"PACKAGES"</span></h2>
                    <p class="section-description">"Flexible pricing options to fit your project needs and budget."</p>
                </Reveal>
                <PackageGrid packages=STUDIO_PACKAGES motion=Motion::Rise(50) />
            </div>
        </section>
        <StudioGallery />
        <Cta cta=&STUDIO_CTA />
    }
}
