use leptos::prelude::*;
use leptos_router::components::A;
use shootsync::content::SOCIAL_LINKS;
use shootsync::nav::Page;

use crate::site::use_site;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <A href=Page::Home.path() attr:class="footer-brand">{site.brand}</A>
                <div class="footer-links">
                    {Page::ALL
                        .into_iter()
                        .map(|page| view! { <A href=page.path() attr:class="footer-link">{page.nav_label()}</A> })
                        .collect_view()}
                </div>
                <div class="footer-social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| view! {
                            <a href=social.href target="_blank" rel="noopener" class="footer-link">{social.platform}</a>
                        })
                        .collect_view()}
                </div>
                <p class="footer-copyright">{site.copyright}</p>
            </div>
        </footer>
    }
}
