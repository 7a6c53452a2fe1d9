use crate::components::Reveal;
use crate::sections::{Cta, Hero, PortfolioGrid, StatRow};
use leptos::prelude::*;
use shootsync::content::{PORTFOLIO_CTA, PORTFOLIO_HERO, PORTFOLIO_IMPACT};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <Hero hero=&PORTFOLIO_HERO />
        <PortfolioGrid />
        <section class="impact">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"OUR " <span class="section-emphasis">"IMPACT"</span></h2>
                </Reveal>
                <StatRow stats=PORTFOLIO_IMPACT />
            </div>
        </section>
        <Cta cta=&PORTFOLIO_CTA />
    }
}
