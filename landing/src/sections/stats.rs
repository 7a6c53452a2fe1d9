use leptos::prelude::*;
use shootsync::content::Stat;
use shootsync::reveal::Motion;

use crate::components::Reveal;

#[component]
pub fn StatTile(stat: &'static Stat, #[prop(optional)] index: usize) -> impl IntoView {
    view! {
        <Reveal index=index motion=Some(Motion::Grow(0.8)) class="stat">
            <div class="stat-number">{stat.number}</div>
            <div class="stat-label">{stat.label}</div>
        </Reveal>
    }
}

/// Row of stat tiles, scaling in one after another.
#[component]
pub fn StatRow(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="stat-row">
            {stats
                .iter()
                .enumerate()
                .map(|(index, stat)| view! { <StatTile stat=stat index=index /> })
                .collect_view()}
        </div>
    }
}
