use serde::Serialize;

use crate::catalog::Catalog;
use crate::favorites::FavoritesLedger;
use crate::highlight::{highlight, HighlightedText};
use crate::model::{Difficulty, Recipe};
use crate::query::{self, QueryState};
use crate::steps::{render_with, RenderedStep};

/// Everything the external renderer needs for one visible recipe.
/// The core never touches presentation widgets; this payload is the
/// whole contract.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeCard {
    pub id: u32,
    pub title: HighlightedText,
    pub description: HighlightedText,
    pub favorite: bool,
    pub ingredients: Vec<HighlightedText>,
    pub steps: Vec<RenderedStep>,
    pub difficulty: Difficulty,
    pub time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One full rendering of the visible catalog subset, in pipeline order.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseView {
    pub cards: Vec<RecipeCard>,
    pub visible_count: usize,
    pub total_count: usize,
}

impl BrowseView {
    /// The "Showing X of Y recipes" counter line.
    pub fn counter_line(&self) -> String {
        format!(
            "Showing {} of {} recipes",
            self.visible_count, self.total_count
        )
    }
}

/// Run the query pipeline and compose a card per visible recipe.
pub fn compose(
    catalog: &Catalog,
    state: &QueryState,
    favorites: &FavoritesLedger,
    quick_threshold: u32,
) -> BrowseView {
    let visible = query::visible(catalog, state, favorites, quick_threshold);
    let query = state.trimmed_search();
    let cards = visible
        .into_iter()
        .map(|recipe| card(recipe, query, favorites.is_favorite(recipe.id)))
        .collect::<Vec<_>>();
    BrowseView {
        visible_count: cards.len(),
        total_count: catalog.len(),
        cards,
    }
}

fn card(recipe: &Recipe, query: &str, favorite: bool) -> RecipeCard {
    RecipeCard {
        id: recipe.id,
        title: highlight(&recipe.title, query),
        description: highlight(&recipe.description, query),
        favorite,
        ingredients: recipe
            .ingredients
            .iter()
            .map(|i| highlight(i, query))
            .collect(),
        steps: render_with(&recipe.steps, &|text| highlight(text, query)),
        difficulty: recipe.difficulty,
        time: recipe.time,
        category: recipe.category.clone(),
    }
}
