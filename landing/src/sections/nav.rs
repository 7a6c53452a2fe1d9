use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use shootsync::nav::{NavLink, Page, nav_links};

use crate::site::use_site;

#[component]
pub fn Nav() -> impl IntoView {
    let brand = use_site().brand;
    let location = use_location();
    let current = Memo::new(move |_| Page::from_path(&location.pathname.get()).ok());
    let (menu_open, set_menu_open) = signal(false);

    // Close the mobile menu and retitle the tab on every navigation.
    Effect::new(move || {
        let page = current.get();
        set_menu_open.set(false);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&document_title(page));
        }
    });

    let links = move || {
        links_for(current.get())
            .into_iter()
            .map(|link| {
                let class = if link.active { "nav-link active" } else { "nav-link" };
                view! {
                    <A href=link.page.path() attr:class=class>
                        {link.page.nav_label()}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="nav">
            <div class="nav-inner container">
                <A href=Page::Home.path() attr:class="nav-brand">{brand}</A>
                <div class="nav-links">
                    {links}
                    <A href=Page::Contact.path() attr:class="btn btn-primary nav-cta">"Get Started"</A>
                </div>
                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    {links}
                    <A href=Page::Contact.path() attr:class="btn btn-primary">"Get Started"</A>
                </div>
            </Show>
        </nav>
    }
}

/// Links for the current route; unknown routes mark nothing active.
fn links_for(current: Option<Page>) -> Vec<NavLink> {
    match current {
        Some(page) => nav_links(page),
        None => Page::ALL
            .into_iter()
            .map(|page| NavLink { page, active: false })
            .collect(),
    }
}

fn document_title(page: Option<Page>) -> String {
    match page {
        Some(Page::Home) | None => format!("ShootSync - {}", Page::Home.title()),
        Some(page) => format!("{} | ShootSync", page.title()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_route_has_no_active_link() {
        assert!(links_for(None).iter().all(|link| !link.active));
        assert_eq!(links_for(Some(Page::Studio)).iter().filter(|l| l.active).count(), 1);
    }

    #[test]
    fn titles() {
        assert_eq!(document_title(Some(Page::Home)), "ShootSync - The Creative Growth Agency");
        assert_eq!(document_title(Some(Page::Portfolio)), "Our Work | ShootSync");
    }
}
