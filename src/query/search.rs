use crate::model::Recipe;

/// Retain recipes whose title, description, or any ingredient contains
/// the query, case-insensitively. Plain substring containment, not
/// tokenized or fuzzy. An empty query passes everything through.
pub fn apply<'a>(recipes: Vec<&'a Recipe>, query: &str) -> Vec<&'a Recipe> {
    if query.is_empty() {
        return recipes;
    }
    let needle = query.to_lowercase();
    recipes
        .into_iter()
        .filter(|r| matches(r, &needle))
        .collect()
}

fn matches(recipe: &Recipe, needle: &str) -> bool {
    recipe.title.to_lowercase().contains(needle)
        || recipe.description.to_lowercase().contains(needle)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(needle))
}
