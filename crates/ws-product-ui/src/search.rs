//! Live search controller.
//!
//! Phases: `Idle` → `Typing` (debounce pending) → `QueryInFlight` →
//! `ResultsShown`. The host forwards DOM events and timer/network
//! completions; the controller answers with what to schedule, what to send
//! and what to write into the dropdown panels.
//!
//! Dropdown visibility is derived: `has_focus || showing_results`.
//! Responses are tagged with the ticket of the debounce firing that sent
//! them and only the newest dispatch may update the panels.

use crate::debounce::{Debouncer, Ticket};
use crate::i18n::Translator;
use crate::recent::{MAX_RECENT_SEARCHES, RecentSearches, RecentStore};
use crate::search_view;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use ws_api_types::SearchResponse;

pub const DEFAULT_ENDPOINT: &str = "/api/method/webshop.templates.pages.product_search.search";
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;
pub const MIN_QUERY_LEN: usize = 3;
pub const RECENT_SEARCHES_KEY: &str = "recent_searches";

/// Page-level search options. Every field has a default, so the page may
/// pass only what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    pub search_box_id: String,
    pub search_area_id: String,
    pub endpoint: String,
    pub debounce_ms: u32,
    pub min_query_len: usize,
    pub max_recent: usize,
    pub storage_key: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_box_id: "#search-box".to_owned(),
            search_area_id: "#dropdownMenuSearch".to_owned(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: MIN_QUERY_LEN,
            max_recent: MAX_RECENT_SEARCHES,
            storage_key: RECENT_SEARCHES_KEY.to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(String),
    #[error("search endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("search response could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Typing,
    QueryInFlight,
    ResultsShown,
}

/// What the host should do after an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Empty box: wipe both result panels now and drop any pending timer.
    ClearPanels,
    /// Too short to search; leave everything as it is.
    Ignored,
    /// (Re)start the quiet-window timer and reveal the dropdown.
    Schedule { ticket: Ticket, delay_ms: u32 },
}

/// One request to send to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub query: String,
}

/// Markup to write into the dropdown after a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelUpdate {
    pub products_html: String,
    pub categories_html: String,
    /// New recent-search chips when the list changed.
    pub recents_html: Option<String>,
}

pub struct SearchController<S: RecentStore> {
    config: SearchConfig,
    store: S,
    i18n: Box<dyn Translator>,
    recents: RecentSearches,
    debouncer: Debouncer,
    pending_query: Option<String>,
    in_flight: Option<Dispatch>,
    phase: SearchPhase,
    has_focus: bool,
    showing_results: bool,
    panels_populated: bool,
}

impl<S: RecentStore> SearchController<S> {
    pub fn new(config: SearchConfig, store: S, i18n: Box<dyn Translator>) -> Self {
        let recents = RecentSearches::load(&store, config.max_recent);
        Self {
            config,
            store,
            i18n,
            recents,
            debouncer: Debouncer::new(),
            pending_query: None,
            in_flight: None,
            phase: SearchPhase::Idle,
            has_focus: false,
            showing_results: false,
            panels_populated: false,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn recents(&self) -> &RecentSearches {
        &self.recents
    }

    pub fn dropdown_visible(&self) -> bool {
        self.has_focus || self.showing_results
    }

    pub fn container_html(&self) -> String {
        let anchor = self.config.search_area_id.trim_start_matches('#');
        search_view::results_container(self.i18n.as_ref(), anchor)
    }

    pub fn recents_html(&self) -> String {
        search_view::recent_searches(&self.recents, self.i18n.as_ref())
    }

    pub fn on_focus(&mut self) {
        self.has_focus = true;
    }

    /// A click somewhere on the page. Hides the dropdown unless it landed in
    /// the search box or the results.
    pub fn on_page_click(&mut self, inside_search_box: bool, inside_results: bool) {
        if !inside_search_box && !inside_results {
            self.has_focus = false;
            self.showing_results = false;
        }
    }

    pub fn on_input(&mut self, value: &str) -> InputOutcome {
        let len = value.chars().count();

        if len == 0 {
            self.debouncer.cancel();
            self.pending_query = None;
            // Anything still in flight belongs to text the shopper erased.
            self.in_flight = None;
            self.phase = SearchPhase::Idle;
            self.showing_results = false;
            self.panels_populated = false;
            return InputOutcome::ClearPanels;
        }

        if len < self.config.min_query_len {
            debug!(len = len, "query too short to dispatch");
            return InputOutcome::Ignored;
        }

        let ticket = self.debouncer.schedule();
        self.pending_query = Some(value.to_owned());
        self.phase = SearchPhase::Typing;
        self.has_focus = true;
        InputOutcome::Schedule {
            ticket,
            delay_ms: self.config.debounce_ms,
        }
    }

    /// A recent-search chip was clicked: the chip text becomes the input.
    pub fn on_recent_chip(&mut self, query: &str) -> InputOutcome {
        self.has_focus = true;
        self.on_input(query)
    }

    /// The quiet-window timer for `ticket` ran out.
    pub fn on_debounce_fired(&mut self, ticket: Ticket) -> Option<Dispatch> {
        if !self.debouncer.fire(ticket) {
            debug!(ticket = ticket.id(), "superseded debounce timer");
            return None;
        }

        let query = self.pending_query.take()?;
        if query.chars().count() < self.config.min_query_len {
            return None;
        }

        let dispatch = Dispatch { ticket, query };
        self.in_flight = Some(dispatch.clone());
        self.phase = SearchPhase::QueryInFlight;
        Some(dispatch)
    }

    /// A response arrived. Returns `None` when it is stale.
    pub fn on_results(&mut self, ticket: Ticket, response: &SearchResponse) -> Option<PanelUpdate> {
        let dispatch = self.take_in_flight(ticket)?;

        let products_html = search_view::product_results(response.products());
        let categories_html = search_view::category_results(response.categories(), self.i18n.as_ref());

        let mut recents_html = None;
        if !response.is_empty() && self.recents.record(&dispatch.query) {
            if let Err(err) = self.store.save(&self.recents.to_vec()) {
                warn!("failed to persist recent searches: {}", err);
            }
            recents_html = Some(self.recents_html());
        }

        self.panels_populated = !response.is_empty();
        self.showing_results = self.has_focus && self.panels_populated;
        self.phase = SearchPhase::ResultsShown;

        Some(PanelUpdate {
            products_html,
            categories_html,
            recents_html,
        })
    }

    /// The request for `ticket` failed. Panels keep whatever they showed.
    pub fn on_failure(&mut self, ticket: Ticket, err: &SearchError) {
        let Some(dispatch) = self.take_in_flight(ticket) else {
            return;
        };
        warn!("search for {:?} failed: {}", dispatch.query, err);
        self.phase = if self.panels_populated {
            SearchPhase::ResultsShown
        } else {
            SearchPhase::Idle
        };
    }

    fn take_in_flight(&mut self, ticket: Ticket) -> Option<Dispatch> {
        match &self.in_flight {
            Some(current) if current.ticket == ticket => self.in_flight.take(),
            _ => {
                debug!(ticket = ticket.id(), "dropping stale search response");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Untranslated;
    use crate::recent::{InMemoryRecentStore, RecentStoreError};
    use ws_api_types::{CategoryResult, ProductResult};

    fn controller(recents: &[&str]) -> SearchController<InMemoryRecentStore> {
        SearchController::new(
            SearchConfig::default(),
            InMemoryRecentStore::with_entries(recents.iter().copied()),
            Box::new(Untranslated),
        )
    }

    fn products(names: &[&str]) -> SearchResponse {
        SearchResponse {
            product_results: Some(
                names
                    .iter()
                    .map(|n| ProductResult {
                        web_item_name: (*n).to_owned(),
                        route: n.to_lowercase(),
                        ..Default::default()
                    })
                    .collect(),
            ),
            category_results: None,
        }
    }

    fn schedule<S: RecentStore>(ctl: &mut SearchController<S>, value: &str) -> Ticket {
        match ctl.on_input(value) {
            InputOutcome::Schedule { ticket, delay_ms } => {
                assert_eq!(delay_ms, DEFAULT_DEBOUNCE_MS);
                ticket
            }
            other => panic!("expected a scheduled dispatch, got {other:?}"),
        }
    }

    #[test]
    fn short_inputs_never_dispatch() {
        let mut ctl = controller(&[]);
        assert_eq!(ctl.on_input(""), InputOutcome::ClearPanels);
        assert_eq!(ctl.on_input("o"), InputOutcome::Ignored);
        assert_eq!(ctl.on_input("oa"), InputOutcome::Ignored);
        assert_eq!(ctl.phase(), SearchPhase::Idle);
        assert!(!ctl.dropdown_visible());
    }

    #[test]
    fn one_dispatch_per_quiet_window() {
        let mut ctl = controller(&[]);
        let tickets: Vec<Ticket> = ["oak", "oak ", "oak c", "oak ch"]
            .iter()
            .map(|v| schedule(&mut ctl, v))
            .collect();
        assert_eq!(ctl.phase(), SearchPhase::Typing);
        assert!(ctl.dropdown_visible());

        let dispatches: Vec<Dispatch> = tickets
            .iter()
            .filter_map(|t| ctl.on_debounce_fired(*t))
            .collect();
        assert_eq!(dispatches.len(), 1);
        assert_eq!(dispatches[0].query, "oak ch");
        assert_eq!(ctl.phase(), SearchPhase::QueryInFlight);
    }

    #[test]
    fn clearing_cancels_pending_dispatch() {
        let mut ctl = controller(&[]);
        let ticket = schedule(&mut ctl, "lamp");
        assert_eq!(ctl.on_input(""), InputOutcome::ClearPanels);
        assert_eq!(ctl.on_debounce_fired(ticket), None);
    }

    #[test]
    fn short_edit_keeps_earlier_schedule() {
        let mut ctl = controller(&[]);
        let ticket = schedule(&mut ctl, "lam");
        assert_eq!(ctl.on_input("la"), InputOutcome::Ignored);
        let dispatch = ctl.on_debounce_fired(ticket).expect("dispatch");
        assert_eq!(dispatch.query, "lam");
    }

    #[test]
    fn results_render_and_record_recent_search() {
        let mut ctl = controller(&[]);
        let ticket = schedule(&mut ctl, "chair");
        ctl.on_debounce_fired(ticket);

        let update = ctl
            .on_results(ticket, &products(&["Oak Chair", "Pine Chair"]))
            .expect("fresh response applies");
        assert_eq!(update.products_html.matches("dropdown-item").count(), 2);
        assert_eq!(update.categories_html, "");
        assert!(update.recents_html.as_deref().unwrap_or_default().contains(r#"data-query="chair""#));
        assert_eq!(ctl.recents().to_vec(), vec!["chair"]);
        assert_eq!(ctl.store.snapshot(), vec!["chair"]);
        assert_eq!(ctl.phase(), SearchPhase::ResultsShown);
        assert!(ctl.dropdown_visible());
    }

    #[test]
    fn category_only_results_still_count() {
        let mut ctl = controller(&[]);
        let ticket = schedule(&mut ctl, "light");
        ctl.on_debounce_fired(ticket);
        let response = SearchResponse {
            product_results: None,
            category_results: Some(vec![CategoryResult {
                name: "Lighting".into(),
                route: "lighting".into(),
            }]),
        };
        let update = ctl.on_results(ticket, &response).expect("applies");
        assert!(update.categories_html.contains("Lighting"));
        assert_eq!(ctl.recents().to_vec(), vec!["light"]);
    }

    #[test]
    fn empty_results_leave_recents_alone() {
        let mut ctl = controller(&["desk"]);
        let ticket = schedule(&mut ctl, "zzzz");
        ctl.on_debounce_fired(ticket);
        let update = ctl.on_results(ticket, &SearchResponse::default()).expect("applies");
        assert_eq!(update.products_html, "");
        assert_eq!(update.recents_html, None);
        assert_eq!(ctl.recents().to_vec(), vec!["desk"]);
    }

    #[test]
    fn recent_list_evicts_oldest_when_full() {
        let mut ctl = controller(&["a", "b", "c", "d"]);
        let ticket = schedule(&mut ctl, "eee");
        ctl.on_debounce_fired(ticket);
        ctl.on_results(ticket, &products(&["E"]));
        assert_eq!(ctl.recents().to_vec(), vec!["b", "c", "d", "eee"]);
        assert_eq!(ctl.store.snapshot().len(), 4);
    }

    /// Storage the browser refuses to open.
    struct BlockedStore;

    impl RecentStore for BlockedStore {
        fn load(&self) -> Result<Vec<String>, RecentStoreError> {
            Err(RecentStoreError::Unavailable("SecurityError".into()))
        }

        fn save(&self, _: &[String]) -> Result<(), RecentStoreError> {
            Err(RecentStoreError::Unavailable("SecurityError".into()))
        }
    }

    #[test]
    fn blocked_storage_keeps_search_working() {
        let mut ctl = SearchController::new(SearchConfig::default(), BlockedStore, Box::new(Untranslated));
        assert!(ctl.recents().is_empty());

        let ticket = schedule(&mut ctl, "oak");
        ctl.on_debounce_fired(ticket).expect("dispatch");
        let update = ctl.on_results(ticket, &products(&["Oak Chair"])).expect("applies");
        assert!(update.products_html.contains("Oak Chair"));
        assert_eq!(ctl.recents().to_vec(), vec!["oak"]);

        let next = schedule(&mut ctl, "oak table");
        assert!(ctl.on_debounce_fired(next).is_some());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut ctl = controller(&[]);
        let first = schedule(&mut ctl, "oak");
        ctl.on_debounce_fired(first).expect("first dispatch");
        let second = schedule(&mut ctl, "oak table");
        ctl.on_debounce_fired(second).expect("second dispatch");

        assert!(ctl.on_results(second, &products(&["Oak Table"])).is_some());
        assert!(ctl.on_results(first, &products(&["Oak Chair"])).is_none());
        assert_eq!(ctl.recents().to_vec(), vec!["oak table"]);
    }

    #[test]
    fn response_after_clear_is_dropped() {
        let mut ctl = controller(&[]);
        let ticket = schedule(&mut ctl, "rug");
        ctl.on_debounce_fired(ticket);
        ctl.on_input("");
        assert!(ctl.on_results(ticket, &products(&["Rug"])).is_none());
        assert!(ctl.recents().is_empty());
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut ctl = controller(&[]);
        let first = schedule(&mut ctl, "oak");
        ctl.on_debounce_fired(first);
        ctl.on_results(first, &products(&["Oak Chair"]));

        let second = schedule(&mut ctl, "oaks");
        ctl.on_debounce_fired(second);
        ctl.on_failure(second, &SearchError::Status { status: 500, body: "boom".into() });

        assert_eq!(ctl.phase(), SearchPhase::ResultsShown);
        assert!(ctl.dropdown_visible());
        assert_eq!(ctl.recents().to_vec(), vec!["oak"]);
    }

    #[test]
    fn failure_without_prior_results_returns_to_idle() {
        let mut ctl = controller(&[]);
        let ticket = schedule(&mut ctl, "oak");
        ctl.on_debounce_fired(ticket);
        ctl.on_failure(ticket, &SearchError::Transport("offline".into()));
        assert_eq!(ctl.phase(), SearchPhase::Idle);
    }

    #[test]
    fn outside_click_hides_dropdown() {
        let mut ctl = controller(&[]);
        ctl.on_focus();
        assert!(ctl.dropdown_visible());
        ctl.on_page_click(false, true);
        assert!(ctl.dropdown_visible());
        ctl.on_page_click(true, false);
        assert!(ctl.dropdown_visible());
        ctl.on_page_click(false, false);
        assert!(!ctl.dropdown_visible());
    }

    #[test]
    fn chip_click_reruns_search() {
        let mut ctl = controller(&["oak chair"]);
        match ctl.on_recent_chip("oak chair") {
            InputOutcome::Schedule { ticket, .. } => {
                let dispatch = ctl.on_debounce_fired(ticket).expect("dispatch");
                assert_eq!(dispatch.query, "oak chair");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(ctl.dropdown_visible());
    }

    #[test]
    fn config_defaults_and_overrides() -> anyhow::Result<()> {
        let config: SearchConfig =
            serde_json::from_value(serde_json::json!({ "search_box_id": "#mobile-search" }))?;
        assert_eq!(config.search_box_id, "#mobile-search");
        assert_eq!(config.debounce_ms, 200);
        assert_eq!(config.min_query_len, 3);
        assert_eq!(config.max_recent, 4);
        assert_eq!(config.storage_key, "recent_searches");
        Ok(())
    }

    #[test]
    fn container_and_empty_recents_markup() {
        let ctl = controller(&[]);
        assert!(ctl.container_html().contains(r#"aria-labelledby="dropdownMenuSearch""#));
        assert!(ctl.recents_html().contains("No searches yet."));
    }
}
