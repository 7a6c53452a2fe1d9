use leptos::prelude::*;
use shootsync::catalog::{CatalogItem, CategoryFilter};
use shootsync::content::portfolio_catalog;

use crate::components::{MediaImage, Reveal};

/// Filter bar plus the card grid it controls.
///
/// The selection lives only in this component and resets to `ALL` whenever
/// the page is mounted again.
#[component]
pub fn PortfolioGrid() -> impl IntoView {
    let catalog = StoredValue::new(portfolio_catalog());
    let options = catalog.with_value(|c| c.filter_options());
    let (selected, set_selected) = signal(CategoryFilter::All);

    let visible = Memo::new(move |_| {
        let filter = selected.get();
        catalog.with_value(|c| c.filter(filter).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <section class="portfolio">
            <div class="container">
                <div class="filter-bar" role="toolbar" aria-label="Filter projects by category">
                    {options
                        .into_iter()
                        .map(|option| view! {
                            <button
                                class=move || filter_class(selected.get(), option)
                                aria-pressed=move || (selected.get() == option).to_string()
                                on:click=move |_| set_selected.set(option)
                            >
                                {option.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
                <div class="portfolio-grid">
                    <For
                        each=move || {
                            let filter = selected.get();
                            visible.get().into_iter().enumerate().map(move |(i, item)| (filter, i, item))
                        }
                        key=|(filter, _, item)| card_key(*filter, item)
                        children=|(_, index, item)| view! { <PortfolioCard item=item index=index /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PortfolioCard(item: CatalogItem, index: usize) -> impl IntoView {
    let highlights = item.highlights().to_vec();
    let (caption_title, caption_category) = caption(&item);
    view! {
        <Reveal index=index class="portfolio-card">
            <article tabindex="0" class="portfolio-card-inner">
                <MediaImage media=item.media.clone() alt=item.title.clone() class="portfolio-image" />
                <div class="portfolio-overlay">
                    <div class="portfolio-meta">
                        <span class="portfolio-badge">{item.category.label()}</span>
                        <span class="portfolio-year">{item.year.clone()}</span>
                    </div>
                    <h3 class="portfolio-title">{item.title.clone()}</h3>
                    <p class="portfolio-description">{item.description.clone()}</p>
                    <div class="portfolio-metrics">
                        {highlights
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div class="portfolio-metric">
                                    <span class="metric-value">{value}</span>
                                    <span class="metric-label">{label}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </article>
            <div class="portfolio-caption">
                <h3 class="portfolio-caption-title">{caption_title}</h3>
                <p class="portfolio-caption-category">{caption_category}</p>
            </div>
        </Reveal>
    }
}

fn filter_class(selected: CategoryFilter, option: CategoryFilter) -> &'static str {
    if selected == option {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}

/// Title and category printed under the card, visible without hover.
fn caption(item: &CatalogItem) -> (String, &'static str) {
    (item.title.clone(), item.category.label())
}

/// New selection, new key: cards remount and replay their reveal.
fn card_key(filter: CategoryFilter, item: &CatalogItem) -> String {
    format!("{}:{}", filter.label(), item.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shootsync::catalog::Category;

    #[test]
    fn keys_change_with_selection() {
        let catalog = portfolio_catalog();
        let nike = &catalog.items()[0];
        assert_eq!(card_key(CategoryFilter::All, nike), "ALL:Nike Air Max Campaign");
        assert_ne!(
            card_key(CategoryFilter::All, nike),
            card_key(CategoryFilter::Only(Category::Commercial), nike)
        );
    }

    #[test]
    fn every_card_has_a_caption() {
        let catalog = portfolio_catalog();
        for item in catalog.items() {
            let (title, category) = caption(item);
            assert_eq!(title, item.title);
            assert_eq!(category, item.category.label());
        }
        assert_eq!(caption(&catalog.items()[0]), ("Nike Air Max Campaign".to_string(), "COMMERCIAL"));
    }

    #[test]
    fn only_selected_button_is_active() {
        let ugc = CategoryFilter::Only(Category::Ugc);
        assert_eq!(filter_class(ugc, ugc), "filter-btn active");
        assert_eq!(filter_class(ugc, CategoryFilter::All), "filter-btn");
    }
}
