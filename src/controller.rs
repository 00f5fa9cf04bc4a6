//! Search page state: query text, results and the debounced reload.
//!
//! Every change of the query schedules a reload after a quiet period; a newer
//! change aborts the pending timer. A load that already started is never
//! cancelled, so overlapping loads both land and the last one to resolve wins
//! `trips`. The first to finish also resets `loading`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::external_api::trips_api::models::trip::Trip;
use crate::external_api::trips_api::TripsApi;
use crate::utils::append_tag;

/// Snapshot of the search page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub search_query: String,
    pub trips: Vec<Trip>,
    pub loading: bool,
    /// Loads started and not yet finished
    pub requests_in_flight: usize,
}

pub struct SearchController {
    api: Arc<TripsApi>,
    state: Arc<watch::Sender<SearchState>>,
    debounce: Duration,
    pending: Option<JoinHandle<()>>,
}

impl SearchController {
    pub fn new(api: TripsApi, debounce: Duration) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            api: Arc::new(api),
            state: Arc::new(state),
            debounce,
            pending: None,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Initial fetch-all, not debounced
    pub fn mount(&self) {
        start_load(Arc::clone(&self.api), Arc::clone(&self.state), String::new());
    }

    /// Typing in the search box
    pub fn set_search_query(&mut self, value: impl Into<String>) {
        let value = value.into();
        let changed = self.state.send_if_modified(|state| {
            if state.search_query == value {
                return false;
            }
            state.search_query = value.clone();
            true
        });
        if changed {
            self.schedule_load(value);
        }
    }

    /// Add `tag` to the query unless it is already one of its tokens.
    ///
    /// Returns whether the query changed.
    pub fn click_tag(&mut self, tag: &str) -> bool {
        let query = self.state.borrow().search_query.clone();
        match append_tag(&query, tag) {
            Some(new_query) => {
                tracing::debug!(tag, new_query, "Tag added to query");
                self.set_search_query(new_query);
                true
            }
            None => false,
        }
    }

    /// Wait for the pending timer and every started load
    pub async fn settle(&mut self) {
        if let Some(pending) = self.pending.take() {
            let _ = pending.await;
        }
        let mut receiver = self.state.subscribe();
        let _ = receiver.wait_for(|state| state.requests_in_flight == 0).await;
    }

    fn schedule_load(&mut self, keywords: String) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let debounce = self.debounce;
        tracing::debug!(keywords, ?debounce, "Search scheduled");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            start_load(api, state, keywords);
        }));
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

/// Mark the page as loading and fetch on a detached task
fn start_load(api: Arc<TripsApi>, state: Arc<watch::Sender<SearchState>>, keywords: String) {
    state.send_modify(|state| {
        state.loading = true;
        state.requests_in_flight += 1;
    });
    tokio::spawn(async move {
        let trips = api.fetch_trips(&keywords).await;
        tracing::debug!(keywords, count = trips.len(), "Trips loaded");
        state.send_modify(|state| {
            state.trips = trips;
            state.loading = false;
            state.requests_in_flight -= 1;
        });
    });
}
