use leptos::prelude::*;
use shootsync::content::{ABOUT_STORY, ABOUT_VALUES, HOME_ABOUT, HOME_STATS};

use super::stats::StatRow;
use crate::components::Reveal;

/// Home page "who we are" blurb with the headline numbers.
#[component]
pub fn AboutBlurb() -> impl IntoView {
    view! {
        <section class="about-blurb">
            <div class="container about-grid">
                <Reveal>
                    <h2 class="section-title">"ABOUT " <span class="section-emphasis">"US"</span></h2>
                    <p class="section-description">{HOME_ABOUT}</p>
                </Reveal>
                <StatRow stats=HOME_STATS />
            </div>
        </section>
    }
}

#[component]
pub fn Story() -> impl IntoView {
    view! {
        <section class="story">
            <div class="container container-narrow">
                <Reveal>
                    <h2 class="section-title">"OUR " <span class="section-emphasis">"STORY"</span></h2>
                </Reveal>
                {ABOUT_STORY
                    .iter()
                    .enumerate()
                    .map(|(index, paragraph)| view! {
                        <Reveal index=index>
                            <p class="story-paragraph">{*paragraph}</p>
                        </Reveal>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Values() -> impl IntoView {
    view! {
        <section class="values">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"OUR " <span class="section-emphasis">"VALUES"</span></h2>
                </Reveal>
                <div class="value-grid">
                    {ABOUT_VALUES
                        .iter()
                        .enumerate()
                        .map(|(index, value)| view! {
                            <Reveal index=index class="value-card">
                                <h3 class="value-title">{value.title}</h3>
                                <p class="value-description">{value.description}</p>
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
