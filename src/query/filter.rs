use std::collections::HashSet;

use log::warn;

use crate::model::{Difficulty, Recipe};

/// The single active filter. Filters are exclusive; selecting one
/// replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Favorites,
    Difficulty(Difficulty),
    /// Recipes at or under the configured quick-time threshold.
    Quick,
}

impl Filter {
    /// Parse a filter key from the UI. Unknown keys fail open to `All`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "all" => Filter::All,
            "favorites" => Filter::Favorites,
            "quick" => Filter::Quick,
            other => match Difficulty::from_key(other) {
                Some(d) => Filter::Difficulty(d),
                None => {
                    warn!("unknown filter key {other:?}, falling back to \"all\"");
                    Filter::All
                }
            },
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Favorites => "favorites",
            Filter::Difficulty(d) => d.as_str(),
            Filter::Quick => "quick",
        }
    }
}

/// Retain recipes matching the active filter, preserving input order.
pub fn apply<'a>(
    recipes: Vec<&'a Recipe>,
    filter: Filter,
    favorites: &HashSet<u32>,
    quick_threshold: u32,
) -> Vec<&'a Recipe> {
    match filter {
        Filter::All => recipes,
        Filter::Favorites => recipes
            .into_iter()
            .filter(|r| favorites.contains(&r.id))
            .collect(),
        Filter::Difficulty(level) => recipes
            .into_iter()
            .filter(|r| r.difficulty == level)
            .collect(),
        Filter::Quick => recipes
            .into_iter()
            .filter(|r| r.time <= quick_threshold)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Step;

    fn recipes() -> Vec<Recipe> {
        let mk = |id, time, difficulty| Recipe {
            id,
            title: format!("Recipe {id}"),
            description: String::new(),
            category: None,
            difficulty,
            time,
            ingredients: vec![],
            steps: vec![Step::Leaf("Cook".to_string())],
        };
        vec![
            mk(1, 25, Difficulty::Easy),
            mk(2, 45, Difficulty::Medium),
            mk(3, 30, Difficulty::Hard),
            mk(4, 31, Difficulty::Easy),
        ]
    }

    #[test]
    fn unknown_key_fails_open_to_all() {
        assert_eq!(Filter::from_key("spicy"), Filter::All);
        assert_eq!(Filter::from_key(""), Filter::All);
    }

    #[test]
    fn known_keys_parse() {
        assert_eq!(Filter::from_key("favorites"), Filter::Favorites);
        assert_eq!(Filter::from_key("quick"), Filter::Quick);
        assert_eq!(
            Filter::from_key("medium"),
            Filter::Difficulty(Difficulty::Medium)
        );
    }

    #[test]
    fn quick_is_inclusive_of_threshold() {
        let all = recipes();
        let refs: Vec<&Recipe> = all.iter().collect();
        let out = apply(refs, Filter::Quick, &HashSet::new(), 30);
        let ids: Vec<u32> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn favorites_filter_uses_ledger_membership() {
        let all = recipes();
        let refs: Vec<&Recipe> = all.iter().collect();
        let favs: HashSet<u32> = [2, 4, 99].into_iter().collect();
        let out = apply(refs, Filter::Favorites, &favs, 30);
        let ids: Vec<u32> = out.iter().map(|r| r.id).collect();
        // stale id 99 is simply never produced
        assert_eq!(ids, [2, 4]);
    }

    #[test]
    fn difficulty_filter_matches_exactly() {
        let all = recipes();
        let refs: Vec<&Recipe> = all.iter().collect();
        let out = apply(
            refs,
            Filter::Difficulty(Difficulty::Easy),
            &HashSet::new(),
            30,
        );
        let ids: Vec<u32> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 4]);
    }
}
