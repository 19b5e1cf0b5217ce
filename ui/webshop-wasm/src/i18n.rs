//! Bridge to the page's `__()` translation function.

use crate::dom;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use ws_product_ui::Translator;

/// Looks labels up through `window.__` when the page defines it, otherwise
/// returns them unchanged.
pub struct PageTranslator {
    func: Option<Function>,
}

impl PageTranslator {
    pub fn detect() -> Self {
        let func = Reflect::get(&dom::window(), &JsValue::from_str("__"))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok());
        Self { func }
    }
}

impl Translator for PageTranslator {
    fn translate(&self, text: &str) -> String {
        self.func
            .as_ref()
            .and_then(|f| f.call1(&JsValue::NULL, &JsValue::from_str(text)).ok())
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| text.to_owned())
    }
}
