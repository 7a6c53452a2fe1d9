use leptos::prelude::*;
use leptos_router::components::A;
use shootsync::content::CallToAction;

use crate::components::Reveal;

/// Closing call-to-action band at the bottom of a page.
#[component]
pub fn Cta(cta: &'static CallToAction) -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container">
                <Reveal>
                    <h2 class="cta-title">
                        {cta.lines.iter().map(|line| view! { <span class="cta-line">{*line}</span> }).collect_view()}
                        {cta.emphasis.map(|emphasis| view! { <span class="cta-line cta-emphasis">{emphasis}</span> })}
                    </h2>
                </Reveal>
                <Reveal index=1>
                    <p class="cta-description">{cta.body}</p>
                </Reveal>
                <Reveal index=2 class="cta-actions">
                    <A href=cta.primary.target.path() attr:class="btn btn-primary">{cta.primary.label}</A>
                    {cta.secondary.map(|action| view! {
                        <A href=action.target.path() attr:class="btn btn-secondary">{action.label}</A>
                    })}
                </Reveal>
            </div>
        </section>
    }
}
