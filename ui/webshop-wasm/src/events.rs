//! Event binding.
//!
//! Listeners are attached once per widget and leaked with `forget()`; the
//! widgets live as long as the page.

use crate::dom::{self, SearchElements};
use crate::search;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

/// Attach a handler for `event` on `target`.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Bind the search box, the page-level outside click and the recent chips.
pub fn bind_search_events(els: &SearchElements, search_box_id: &str) -> Result<(), JsValue> {
    // ── Search box ──
    listen(&els.search_box, "focus", |_| search::handle_focus())?;
    {
        let input = els.search_box.clone();
        listen(&els.search_box, "input", move |_| {
            search::handle_input(input.value());
        })?;
    }

    // ── Outside clicks ──
    let body = dom::document()
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
    {
        let search_box_id = search_box_id.to_owned();
        listen(&body, "click", move |e| {
            let inside_box = dom::target_within(&e, &search_box_id);
            let inside_results = dom::target_within(&e, "#search-results-container");
            search::handle_page_click(inside_box, inside_results);
        })?;
    }

    // ── Recent chips (delegated, the list is re-rendered) ──
    listen(&els.recents, "click", |e| {
        let query = dom::closest_from_target(&e, ".recent-search")
            .and_then(|chip| chip.get_attribute("data-query"));
        if let Some(query) = query {
            e.prevent_default();
            search::handle_recent_chip(query);
        }
    })?;

    Ok(())
}
