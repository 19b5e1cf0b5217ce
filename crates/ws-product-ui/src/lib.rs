//! Storefront product UI core.
//!
//! Pure view composition for the catalog grid/list views and the state
//! machine behind the live search dropdown. Nothing here touches the DOM;
//! the browser binding in `ui/webshop-wasm` feeds events in and writes the
//! returned markup out.

pub mod card;
pub mod debounce;
pub mod grid;
pub mod i18n;
pub mod list;
pub mod recent;
pub mod search;
pub mod search_view;
pub mod service;

pub use debounce::{Debouncer, Ticket};
pub use i18n::{Translator, Untranslated};
pub use recent::{InMemoryRecentStore, RecentSearches, RecentStore, RecentStoreError};
pub use search::{
    Dispatch, InputOutcome, PanelUpdate, SearchConfig, SearchController, SearchError, SearchPhase,
};
pub use service::{CatalogOptions, CatalogRenderer, RenderedView};
