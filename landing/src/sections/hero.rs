use leptos::prelude::*;
use leptos_router::components::A;
use shootsync::content::{self, Action};

use crate::components::Reveal;

/// Page-top heading block. Only the home page adds buttons.
#[component]
pub fn Hero(
    hero: &'static content::Hero,
    #[prop(optional)] actions: &'static [Action],
) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <Reveal>
                    <h1 class="hero-title">
                        {hero.lines.iter().map(|line| view! { <span class="hero-line">{*line}</span> }).collect_view()}
                        <span class="hero-line hero-emphasis">{hero.emphasis}</span>
                    </h1>
                </Reveal>
                <Reveal index=1>
                    <p class="hero-description">{hero.body}</p>
                </Reveal>
                {(!actions.is_empty()).then(|| view! {
                    <Reveal index=2 class="hero-actions">
                        {actions
                            .iter()
                            .enumerate()
                            .map(|(i, action)| {
                                let class = if i == 0 { "btn btn-primary" } else { "btn btn-secondary" };
                                view! { <A href=action.target.path() attr:class=class>{action.label}</A> }
                            })
                            .collect_view()}
                    </Reveal>
                })}
            </div>
        </section>
    }
}
