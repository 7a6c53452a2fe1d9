use leptos::prelude::*;
use shootsync::media::MediaRef;

use crate::site::use_site;

/// `<img>` that swaps to the placeholder once if its source fails to load.
#[component]
pub fn MediaImage(
    #[prop(into)] media: MediaRef,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let placeholder = use_site().placeholder_image;
    let (src, set_src) = signal(media.resolve(&placeholder).to_string());

    let on_error = move |_| {
        let current = src.get_untracked();
        if let Some(next) = MediaRef::fallback_for(&current, &placeholder) {
            tracing::debug!("image {current} failed, showing {next}");
            set_src.set(next.to_string());
        }
    };

    view! { <img src=src alt=alt class=class loading="lazy" on:error=on_error /> }
}
