//! The query pipeline: search, then filter, then sort, applied in that
//! order over borrowed catalog entries. Every stage is a pure function;
//! the catalog itself is never reordered or mutated.

pub mod filter;
pub mod search;
pub mod sort;

pub use filter::Filter;
pub use sort::SortKey;

use crate::catalog::Catalog;
use crate::favorites::FavoritesLedger;
use crate::model::Recipe;

/// The current search/filter/sort selection driving visible output.
/// One per session; mutated only through session event handlers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub search: String,
    pub filter: Filter,
    pub sort: SortKey,
}

impl QueryState {
    /// The effective search query; whitespace-only input counts as none.
    pub fn trimmed_search(&self) -> &str {
        self.search.trim()
    }
}

/// Compute the visible, ordered subset of the catalog for a query state.
///
/// Deterministic: the same catalog and state always produce the same
/// sequence. Ties under sorting keep catalog order (stable sort over a
/// search/filter result that itself preserves catalog order).
pub fn visible<'a>(
    catalog: &'a Catalog,
    state: &QueryState,
    favorites: &FavoritesLedger,
    quick_threshold: u32,
) -> Vec<&'a Recipe> {
    let recipes: Vec<&Recipe> = catalog.iter().collect();
    let recipes = search::apply(recipes, state.trimmed_search());
    let recipes = filter::apply(recipes, state.filter, favorites.ids(), quick_threshold);
    sort::apply(recipes, state.sort)
}
