//! Page-wide widget state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Borrows must end before any DOM call that can re-enter an event handler
//! (`focus()` dispatches `focus` synchronously).

use crate::dom::{self, SearchElements};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use web_sys::Storage;
use ws_product_ui::{RecentStore, RecentStoreError, SearchController};

/// `localStorage`, or `Unavailable` when the browser refuses access
/// (blocked cookies, sandboxed frames).
fn storage() -> Result<Storage, RecentStoreError> {
    dom::window()
        .local_storage()
        .map_err(|e| RecentStoreError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| RecentStoreError::Unavailable("localStorage is disabled".into()))
}

/// Recent searches kept in `localStorage` as a JSON array of strings.
pub struct LocalRecentStore {
    key: String,
}

impl LocalRecentStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }
}

impl RecentStore for LocalRecentStore {
    fn load(&self) -> Result<Vec<String>, RecentStoreError> {
        let raw = storage()?
            .get_item(&self.key)
            .map_err(|e| RecentStoreError::Unavailable(format!("{:?}", e)))?;
        match raw {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[String]) -> Result<(), RecentStoreError> {
        let raw = serde_json::to_string(entries)?;
        storage()?
            .set_item(&self.key, &raw)
            .map_err(|e| RecentStoreError::Unavailable(format!("{:?}", e)))
    }
}

/// A bound search widget: controller, its elements and the live debounce
/// timer. Dropping the timer cancels it.
pub struct SearchSession {
    pub controller: SearchController<LocalRecentStore>,
    pub els: SearchElements,
    pub timer: Option<Timeout>,
}

thread_local! {
    static SEARCH: RefCell<Option<SearchSession>> = RefCell::new(None);
}

pub fn install_search(session: SearchSession) {
    SEARCH.with(|s| *s.borrow_mut() = Some(session));
}

pub fn search_installed() -> bool {
    SEARCH.with(|s| s.borrow().is_some())
}

/// Run a closure against the installed search session, if any.
pub fn with_search<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut SearchSession) -> R,
{
    SEARCH.with(|s| s.borrow_mut().as_mut().map(f))
}
