use leptos::prelude::*;
use leptos_router::components::A;
use shootsync::content::Package;
use shootsync::nav::Page;
use shootsync::reveal::Motion;

use crate::components::Reveal;

/// Pricing step between neighbouring cards.
const PACKAGE_STAGGER_MS: u32 = 200;

#[component]
pub fn PackageGrid(
    packages: &'static [Package],
    #[prop(optional)] motion: Option<Motion>,
) -> impl IntoView {
    view! {
        <div class="package-grid">
            {packages
                .iter()
                .enumerate()
                .map(|(index, package)| view! { <PackageCard package=package index=index motion=motion /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn PackageCard(package: &'static Package, index: usize, motion: Option<Motion>) -> impl IntoView {
    let (class, button) = if package.popular {
        ("package popular", "btn btn-primary")
    } else {
        ("package", "btn btn-secondary")
    };
    view! {
        <Reveal index=index step_ms=PACKAGE_STAGGER_MS motion=motion class=class>
            {package.popular.then(|| view! { <span class="package-badge">"MOST POPULAR"</span> })}
            <h3 class="package-name">{package.name}</h3>
            <div class="package-price">
                <span class="package-amount">{package.price}</span>
                <span class="package-period">{package.period}</span>
            </div>
            <p class="package-description">{package.description}</p>
            <ul class="package-features">
                {package.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
            <A href=Page::Contact.path() attr:class=button>
                {package.cta}
            </A>
        </Reveal>
    }
}
