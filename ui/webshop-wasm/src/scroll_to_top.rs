//! Floating "back to top" button.

use crate::dom;
use crate::events;
use crate::i18n::PageTranslator;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use ws_product_ui::Translator;

const BUTTON_ID: &str = "scroll-to-top";
const SHOW_AFTER_PX: f64 = 300.0;

fn button_html(title: &str) -> String {
    format!(
        r#"<button id="{BUTTON_ID}" class="btn btn-primary btn-sm shadow" title="{title}" style="display: none;">
  <svg width="16" height="16" viewBox="0 0 16 16" fill="none" stroke="currentColor" stroke-width="2"><path d="M4 10l4-4 4 4"/></svg>
</button>"#,
        title = ws_product_ui::card::escape(title),
    )
}

fn set_shown(button: &HtmlElement, shown: bool) {
    let _ = button
        .style()
        .set_property("display", if shown { "block" } else { "none" });
}

/// Append the button to `<body>` and show it once the page has scrolled.
/// Calling it twice is a no-op.
#[wasm_bindgen]
pub fn init_scroll_to_top() -> Result<(), JsValue> {
    let selector = format!("#{BUTTON_ID}");
    if dom::query(&selector).is_some() {
        return Ok(());
    }

    let body = dom::document()
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
    let title = PageTranslator::detect().translate("Back to top");
    dom::append_html(&body, &button_html(&title))?;

    let button = dom::query_typed::<HtmlElement>(&selector)
        .ok_or_else(|| JsValue::from_str("scroll-to-top button was not inserted"))?;

    {
        let button = button.clone();
        events::listen(&dom::window(), "scroll", move |_| {
            let y = dom::window().scroll_y().unwrap_or(0.0);
            set_shown(&button, y > SHOW_AFTER_PX);
        })?;
    }

    events::listen(&button, "click", |e| {
        e.prevent_default();
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        dom::window().scroll_to_with_scroll_to_options(&opts);
    })
}
