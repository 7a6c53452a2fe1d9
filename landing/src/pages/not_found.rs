use leptos::prelude::*;
use leptos_router::components::A;
use shootsync::nav::Page;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">
                    <span class="hero-line">"PAGE NOT"</span>
                    <span class="hero-line hero-emphasis">"FOUND"</span>
                </h1>
                <A href=Page::Home.path() attr:class="btn btn-primary">"Back to Home"</A>
            </div>
        </section>
    }
}
