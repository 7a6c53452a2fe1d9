use leptos::prelude::*;
use shootsync::content::{HOME_SERVICES, SERVICE_OFFERINGS, SERVICES_INTRO};

use crate::components::Reveal;

/// Four short service cards on the home page.
#[component]
pub fn ServiceHighlights() -> impl IntoView {
    view! {
        <section class="services">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"OUR " <span class="section-emphasis">"SERVICES"</span></h2>
                    <p class="section-description">{SERVICES_INTRO}</p>
                </Reveal>
                <div class="service-grid">
                    {HOME_SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| {
                            let class = if service.highlighted { "service-card highlighted" } else { "service-card" };
                            view! {
                                <Reveal index=index class=class>
                                    <h3 class="service-title">{service.title}</h3>
                                    <p class="service-description">{service.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Full offering cards with features and starting price.
#[component]
pub fn ServiceOfferings() -> impl IntoView {
    view! {
        <section class="services">
            <div class="container">
                <div class="service-grid service-grid-wide">
                    {SERVICE_OFFERINGS
                        .iter()
                        .enumerate()
                        .map(|(index, offering)| {
                            let class = if offering.highlighted { "service-card highlighted" } else { "service-card" };
                            view! {
                                <Reveal index=index class=class>
                                    <h3 class="service-title">{offering.title}</h3>
                                    <p class="service-description">{offering.description}</p>
                                    <ul class="service-features">
                                        {offering.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                    </ul>
                                    <div class="service-price">{offering.price}</div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
