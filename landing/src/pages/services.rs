use crate::components::Reveal;
use crate::sections::{Cta, Hero, PackageGrid, ServiceOfferings};
use leptos::prelude::*;
use shootsync::content::{SERVICE_PACKAGES, SERVICES_CTA, SERVICES_HERO};

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Hero hero=&SERVICES_HERO />
        <ServiceOfferings />
        <section class="packages">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"PRICING " <span class="section-emphasis">"PACKAGES"</span></h2>
                    <p class="section-description">
                        "Choose the perfect package for your business needs. All packages include our signature creative excellence."
                    </p>
                </Reveal>
                <PackageGrid packages=SERVICE_PACKAGES />
            </div>
        </section>
        <Cta cta=&SERVICES_CTA />
    }
}
