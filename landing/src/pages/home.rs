// Home page - hero, about blurb, services, special offer
use crate::sections::{AboutBlurb, Cta, Hero, ServiceHighlights};
use leptos::prelude::*;
use shootsync::content::{HOME_HERO, HOME_HERO_ACTIONS, HOME_OFFER};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero hero=&HOME_HERO actions=&HOME_HERO_ACTIONS />
        <AboutBlurb />
        <ServiceHighlights />
        <Cta cta=&HOME_OFFER />
    }
}
