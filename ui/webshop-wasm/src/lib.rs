//! Webshop storefront widgets for the browser.
//!
//! Exposes the product grid/list renderers and the live search dropdown to
//! the page scripts. Markup and search state live in `ws-product-ui`; this
//! crate only owns DOM access, timers, storage and HTTP.

pub mod api;
pub mod catalog;
pub mod dom;
pub mod events;
pub mod i18n;
pub mod scroll_to_top;
pub mod search;
pub mod state;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    if let Err(err) = scroll_to_top::init_scroll_to_top() {
        gloo_console::warn!("scroll-to-top unavailable:", err);
    }
}
