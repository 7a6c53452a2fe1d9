// ShootSync site - Leptos 0.8 Edition
// Developed by The ShootSync Team (c)2024

mod components;
mod pages;
mod sections;
mod site;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::*;
use sections::{Footer, Nav};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = site::load();
    tracing::info!("ShootSync site v{}", env!("CARGO_PKG_VERSION"));
    provide_context(config);

    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/portfolio") view=PortfolioPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/studio") view=StudioPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
