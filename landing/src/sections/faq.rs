use leptos::prelude::*;
use shootsync::content::FAQS;
use shootsync::reveal::Motion;

use crate::components::Reveal;

#[component]
pub fn FaqList() -> impl IntoView {
    view! {
        <section class="faq">
            <div class="container container-narrow">
                <Reveal>
                    <h2 class="section-title">"FREQUENTLY ASKED " <span class="section-emphasis">"QUESTIONS"</span></h2>
                </Reveal>
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(index, faq)| view! {
                        <Reveal index=index motion=Some(Motion::Rise(20)) class="faq-item">
                            <h3 class="faq-question">{faq.question}</h3>
                            <p class="faq-answer">{faq.answer}</p>
                        </Reveal>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
