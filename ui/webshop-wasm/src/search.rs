//! Live product search dropdown.
//!
//! All decisions are taken by [`SearchController`]; this module turns its
//! outcomes into DOM writes, timers and requests.

use crate::api;
use crate::dom::{self, SearchElements};
use crate::events;
use crate::i18n::PageTranslator;
use crate::state::{self, LocalRecentStore, SearchSession};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use ws_api_types::SearchResponse;
use ws_product_ui::{InputOutcome, SearchConfig, SearchController, SearchError, Ticket};

/// Attach the search dropdown to the page. `options` is an optional
/// `SearchConfig` object; missing fields take their defaults.
#[wasm_bindgen]
pub fn init_product_search(options: JsValue) -> Result<(), JsValue> {
    if state::search_installed() {
        gloo_console::warn!("product search is already initialised");
        return Ok(());
    }

    let config: SearchConfig = if options.is_undefined() || options.is_null() {
        SearchConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };

    let store = LocalRecentStore::new(&config.storage_key);
    let controller = SearchController::new(config, store, Box::new(PageTranslator::detect()));

    let cfg = controller.config();
    let els = SearchElements::bind(
        &cfg.search_box_id,
        &cfg.search_area_id,
        &controller.container_html(),
    )?;
    dom::set_inner_html(&els.recents, &controller.recents_html());
    events::bind_search_events(&els, &cfg.search_box_id)?;

    state::install_search(SearchSession {
        controller,
        els,
        timer: None,
    });
    Ok(())
}

fn sync_visibility(s: &SearchSession) {
    s.els.set_dropdown_visible(s.controller.dropdown_visible());
}

fn apply_outcome(s: &mut SearchSession, outcome: InputOutcome) {
    match outcome {
        InputOutcome::ClearPanels => {
            s.timer = None;
            dom::set_inner_html(&s.els.products, "");
            dom::set_inner_html(&s.els.categories, "");
        }
        InputOutcome::Ignored => {}
        InputOutcome::Schedule { ticket, delay_ms } => {
            // Replacing the previous timeout clears it.
            s.timer = Some(Timeout::new(delay_ms, move || on_timer(ticket)));
        }
    }
    sync_visibility(s);
}

pub fn handle_focus() {
    state::with_search(|s| {
        s.controller.on_focus();
        sync_visibility(s);
    });
}

pub fn handle_page_click(inside_box: bool, inside_results: bool) {
    state::with_search(|s| {
        s.controller.on_page_click(inside_box, inside_results);
        sync_visibility(s);
    });
}

pub fn handle_input(value: String) {
    state::with_search(|s| {
        let outcome = s.controller.on_input(&value);
        apply_outcome(s, outcome);
    });
}

/// A recent chip was picked: fill the box, run the query, refocus.
pub fn handle_recent_chip(query: String) {
    let els = state::with_search(|s| {
        s.els.search_box.set_value(&query);
        let outcome = s.controller.on_recent_chip(&query);
        apply_outcome(s, outcome);
        s.els.clone()
    });
    // focus() re-enters handle_focus, so the session borrow must be released.
    if let Some(els) = els {
        els.focus_search_box();
    }
}

fn on_timer(ticket: Ticket) {
    // The fired timeout stays in the session until the next schedule; dropping
    // it here would free the closure that is running.
    let dispatch = state::with_search(|s| {
        s.controller
            .on_debounce_fired(ticket)
            .map(|d| (d, s.controller.config().endpoint.clone()))
    })
    .flatten();

    let Some((dispatch, endpoint)) = dispatch else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = api::search(&endpoint, &dispatch.query).await;
        apply_response(dispatch.ticket, result);
    });
}

fn apply_response(ticket: Ticket, result: Result<SearchResponse, SearchError>) {
    state::with_search(|s| match result {
        Ok(response) => {
            let Some(update) = s.controller.on_results(ticket, &response) else {
                return;
            };
            dom::set_inner_html(&s.els.products, &update.products_html);
            dom::set_inner_html(&s.els.categories, &update.categories_html);
            if let Some(recents) = update.recents_html {
                dom::set_inner_html(&s.els.recents, &recents);
            }
            sync_visibility(s);
        }
        Err(err) => {
            gloo_console::warn!(format!("product search failed: {}", err));
            s.controller.on_failure(ticket, &err);
        }
    });
}
