//! DOM helpers and element bindings.
//!
//! The page template owns these elements; they are looked up once when a
//! widget starts. Missing elements surface as a `JsValue` error naming the
//! selector.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_typed<T: JsCast>(selector: &str) -> Option<T> {
    query(selector).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

/// Append markup after the element's last child.
pub fn append_html(el: &Element, html: &str) -> Result<(), JsValue> {
    el.insert_adjacent_html("beforeend", html)
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

/// Whether the event target sits inside an element matching `selector`.
pub fn target_within(event: &web_sys::Event, selector: &str) -> bool {
    closest_from_target(event, selector).is_some()
}

pub fn closest_from_target(event: &web_sys::Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(selector).ok()?
}

// ── Search elements ──

/// Elements driven by the search controller. Clone-friendly (JS handles).
#[derive(Clone)]
pub struct SearchElements {
    pub search_box: HtmlInputElement,
    pub search_area: Element,
    pub dropdown: Element,
    pub products: Element,
    pub categories: Element,
    pub recents: Element,
}

fn missing(selector: &str) -> JsValue {
    JsValue::from_str(&format!("missing element {}", selector))
}

impl SearchElements {
    /// Resolve the search box and its area, then inject the dropdown
    /// skeleton and bind its panels.
    pub fn bind(search_box_id: &str, search_area_id: &str, container_html: &str) -> Result<Self, JsValue> {
        let search_box =
            query_typed::<HtmlInputElement>(search_box_id).ok_or_else(|| missing(search_box_id))?;
        let search_area = query(search_area_id).ok_or_else(|| missing(search_area_id))?;

        append_html(&search_area, container_html)?;

        let within = |selector: &str| {
            query_within(&search_area, selector).ok_or_else(|| missing(selector))
        };
        let dropdown = within("#search-results-container")?;
        let products = within("#product-scroll")?;
        let categories = within(".category-chips")?;
        let recents = within("#recents")?;

        Ok(Self {
            search_box,
            search_area,
            dropdown,
            products,
            categories,
            recents,
        })
    }

    pub fn set_dropdown_visible(&self, visible: bool) {
        toggle_class(&self.dropdown, "hidden", !visible);
    }

    pub fn focus_search_box(&self) {
        let el: &HtmlElement = &self.search_box;
        let _ = el.focus();
    }
}
