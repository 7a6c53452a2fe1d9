use crate::sections::{Cta, Hero, StatRow, Story, Values};
use leptos::prelude::*;
use shootsync::content::{ABOUT_CTA, ABOUT_HERO, ABOUT_STATS};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Hero hero=&ABOUT_HERO />
        <section class="stats-band">
            <div class="container">
                <StatRow stats=ABOUT_STATS />
            </div>
        </section>
        <Story />
        <Values />
        <Cta cta=&ABOUT_CTA />
    }
}
