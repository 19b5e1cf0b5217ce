//! Grid and list exports used by the product listing page.

use crate::dom;
use crate::i18n::PageTranslator;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use ws_product_ui::{CatalogOptions, CatalogRenderer, RenderedView};

/// Render `options.items` as cards into `products_section`, replacing
/// whatever it held.
#[wasm_bindgen]
pub fn render_product_grid(products_section: &Element, options: JsValue) -> Result<(), JsValue> {
    let options: CatalogOptions = serde_wasm_bindgen::from_value(options)?;
    let renderer = CatalogRenderer::new(options.settings.clone(), PageTranslator::detect());
    mount(products_section, renderer.grid(&options.items, &options.preference))
}

/// Render `options.items` as rows into `products_section`.
#[wasm_bindgen]
pub fn render_product_list(products_section: &Element, options: JsValue) -> Result<(), JsValue> {
    let options: CatalogOptions = serde_wasm_bindgen::from_value(options)?;
    let renderer = CatalogRenderer::new(options.settings.clone(), PageTranslator::detect());
    mount(products_section, renderer.list(&options.items, &options.preference))
}

fn mount(section: &Element, view: RenderedView) -> Result<(), JsValue> {
    dom::toggle_class(section, "hidden", view.hidden);
    dom::set_inner_html(section, "");
    dom::append_html(section, &view.html)
}
