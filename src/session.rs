//! Single-threaded, event-driven session tying the pieces together:
//! input events mutate the query state or the favorites ledger, and each
//! settled change produces a fresh [`BrowseView`] for the external
//! renderer. Search input alone is debounced; everything else
//! recomposes immediately.

use std::time::Duration;

use log::{debug, warn};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::debounce::{Clock, Debouncer};
use crate::favorites::FavoritesLedger;
use crate::query::{Filter, QueryState, SortKey};
use crate::view::{self, BrowseView};

pub struct BrowseSession<C: Clock> {
    catalog: Catalog,
    query: QueryState,
    favorites: FavoritesLedger,
    debouncer: Debouncer,
    pending_search: Option<String>,
    clock: C,
    quick_threshold: u32,
}

impl<C: Clock> BrowseSession<C> {
    pub fn new(catalog: Catalog, favorites: FavoritesLedger, config: &AppConfig, clock: C) -> Self {
        Self {
            catalog,
            query: QueryState::default(),
            favorites,
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            pending_search: None,
            clock,
            quick_threshold: config.quick_threshold_minutes,
        }
    }

    /// Compose the view for the current state. Pure with respect to the
    /// session: calling it twice without an event yields equal payloads.
    pub fn view(&self) -> BrowseView {
        view::compose(
            &self.catalog,
            &self.query,
            &self.favorites,
            self.quick_threshold,
        )
    }

    /// Search input changed. The text is held back until the debounce
    /// window closes; a later [`poll`](Self::poll) absorbs it.
    pub fn search_changed(&mut self, text: impl Into<String>) {
        self.pending_search = Some(text.into());
        self.debouncer.schedule(self.clock.now());
    }

    /// Absorb a quiescent search input, if any. Returns the recomposed
    /// view when the debounce deadline has passed, `None` otherwise.
    pub fn poll(&mut self) -> Option<BrowseView> {
        if !self.debouncer.fire_if_due(self.clock.now()) {
            return None;
        }
        if let Some(text) = self.pending_search.take() {
            debug!("search settled: {text:?}");
            self.query.search = text;
        }
        Some(self.view())
    }

    /// Clear the search box. Immediate: any in-flight debounced input is
    /// discarded along with its deadline.
    pub fn clear_search(&mut self) -> BrowseView {
        self.pending_search = None;
        self.debouncer.cancel();
        self.query.search.clear();
        self.view()
    }

    /// A filter key was selected. Unknown keys fail open to "all";
    /// re-selecting the active filter deselects it back to "all".
    pub fn filter_selected(&mut self, key: &str) -> BrowseView {
        let filter = Filter::from_key(key);
        self.query.filter = if filter == self.query.filter {
            Filter::All
        } else {
            filter
        };
        debug!("filter now {:?}", self.query.filter.as_key());
        self.view()
    }

    /// A sort key was selected. Unknown keys fail open to catalog order.
    pub fn sort_selected(&mut self, key: &str) -> BrowseView {
        self.query.sort = SortKey::from_key(key);
        self.view()
    }

    /// Flip a recipe's favorite flag and persist the set. A persistence
    /// failure keeps the in-memory toggle and is logged, not raised.
    pub fn favorite_toggled(&mut self, id: u32) -> BrowseView {
        if !self.catalog.contains(id) {
            warn!("favorite toggle for unknown recipe id {id}");
        }
        match self.favorites.toggle(id) {
            Ok(now_favorite) => debug!("recipe {id} favorite: {now_favorite}"),
            Err(e) => warn!("failed to persist favorites: {e}"),
        }
        self.view()
    }

    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    pub fn favorites(&self) -> &FavoritesLedger {
        &self.favorites
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
