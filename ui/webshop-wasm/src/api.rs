//! HTTP client for the storefront's whitelisted methods.
//!
//! Same-origin requests; the CSRF token the page template exposes on
//! `window.csrf_token` is forwarded when present.

use crate::dom;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use ws_api_types::{MethodResponse, SearchRequest, SearchResponse};
use ws_product_ui::SearchError;

fn csrf_token() -> Option<String> {
    js_sys::Reflect::get(&dom::window(), &JsValue::from_str("csrf_token"))
        .ok()?
        .as_string()
        .filter(|t| !t.is_empty() && t != "None")
}

/// POST the query to the product search method and unwrap `message`.
pub async fn search(endpoint: &str, query: &str) -> Result<SearchResponse, SearchError> {
    let mut builder = Request::post(endpoint).header("Accept", "application/json");
    if let Some(token) = csrf_token() {
        builder = builder.header("X-Frappe-CSRF-Token", &token);
    }

    let request = builder
        .json(&SearchRequest {
            query: query.to_owned(),
        })
        .map_err(|e| SearchError::Transport(e.to_string()))?;

    let resp = request
        .send()
        .await
        .map_err(|e| SearchError::Transport(e.to_string()))?;

    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SearchError::Status {
            status: resp.status(),
            body,
        });
    }

    let envelope: MethodResponse<SearchResponse> = resp
        .json()
        .await
        .map_err(|e| SearchError::Decode(e.to_string()))?;

    Ok(envelope.message.unwrap_or_default())
}
