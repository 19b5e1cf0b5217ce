//! Markup for the search dropdown.

use crate::card::escape;
use crate::i18n::Translator;
use crate::recent::RecentSearches;
use ws_api_types::{CategoryResult, ProductResult};

pub const RESULTS_CONTAINER_ID: &str = "search-results-container";
pub const PRODUCTS_SCROLL_ID: &str = "product-scroll";
pub const CATEGORY_CHIPS_CLASS: &str = "category-chips";
pub const RECENTS_ID: &str = "recents";
pub const RECENT_CHIP_CLASS: &str = "recent-search";

const FALLBACK_THUMBNAIL: &str = "/assets/webshop/images/cart-empty-state.png";

const CLOCK_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M8 14C11.3137 14 14 11.3137 14 8C14 4.68629 11.3137 2 8 2C4.68629 2 2 4.68629 2 8C2 11.3137 4.68629 14 8 14Z" stroke="var(--gray-500)" stroke-miterlimit="10" stroke-linecap="round" stroke-linejoin="round"/><path d="M8.00027 5.20947V8.00017L10 10" stroke="var(--gray-500)" stroke-miterlimit="10" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Empty dropdown: category chips, product list, recent searches. Starts
/// hidden.
pub fn results_container(i18n: &dyn Translator, anchor_id: &str) -> String {
    format!(
        r#"<div class="overflow-hidden shadow dropdown-menu w-100 hidden" id="{RESULTS_CONTAINER_ID}" aria-labelledby="{anchor}" style="display: flex; flex-direction: column;"><div class="category-container mt-2 mb-1"><div class="{CATEGORY_CHIPS_CLASS}"></div></div><div id="product-results" class="mt-2"><div id="{PRODUCTS_SCROLL_ID}" style="overflow: scroll; max-height: 300px"></div></div><div class="mb-2 mt-2 recent-searches"><div><b>{recent}</b></div><div id="{RECENTS_ID}" style="padding: .25rem 0 1rem 0;"></div></div></div>"#,
        anchor = escape(anchor_id),
        recent = i18n.translate("Recent"),
    )
}

pub fn product_results(results: &[ProductResult]) -> String {
    results.iter().map(product_row).collect()
}

fn product_row(result: &ProductResult) -> String {
    let thumbnail = [&result.thumbnail, &result.website_image]
        .into_iter()
        .find(|s| !s.is_empty())
        .map(String::as_str)
        .unwrap_or(FALLBACK_THUMBNAIL);
    let name = escape(&result.web_item_name);
    let brand = if result.brand.is_empty() {
        String::new()
    } else {
        format!("by {}", escape(&result.brand))
    };

    format!(
        r#"<div class="dropdown-item"><img class="item-thumb" src="{}" alt="{name}" loading="lazy" /><div><a href="/{}">{name}</a><span class="brand-line">{brand}</span></div></div>"#,
        escape(thumbnail),
        escape(&result.route),
    )
}

/// Category chips under a heading. Empty when there are no categories.
pub fn category_results(results: &[CategoryResult], i18n: &dyn Translator) -> String {
    if results.is_empty() {
        return String::new();
    }

    let mut html = format!(r#"<div class="mb-2"><b>{}</b></div>"#, i18n.translate("Categories"));
    for category in results {
        html.push_str(&format!(
            r#"<a href="/{}" class="btn btn-sm category-chip mr-2 mb-2" style="font-size: 13px" role="button">{}</a>"#,
            escape(&category.route),
            escape(&category.name)
        ));
    }
    html
}

/// Clickable chips for past queries, or a muted placeholder.
pub fn recent_searches(recents: &RecentSearches, i18n: &dyn Translator) -> String {
    if recents.is_empty() {
        return format!(
            r#"<span class="text-muted">{}</span>"#,
            i18n.translate("No searches yet.")
        );
    }

    recents
        .iter()
        .map(|query| {
            let query = escape(query);
            format!(
                r#"<div class="{RECENT_CHIP_CLASS} mr-1" data-query="{query}" style="font-size: 13px"><span class="mr-2">{CLOCK_ICON}</span>{query}</div>"#
            )
        })
        .collect()
}
