use log::warn;

use crate::model::Recipe;

/// Sort order for the visible sequence. `Unsorted` keeps catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Unsorted,
    /// Title, case-insensitive lexicographic, ascending.
    Name,
    /// Total minutes, ascending.
    Time,
}

impl SortKey {
    /// Parse a sort key from the UI. Unknown keys fail open to unsorted.
    pub fn from_key(key: &str) -> Self {
        match key {
            "none" => SortKey::Unsorted,
            "name" => SortKey::Name,
            "time" => SortKey::Time,
            other => {
                warn!("unknown sort key {other:?}, leaving catalog order");
                SortKey::Unsorted
            }
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            SortKey::Unsorted => "none",
            SortKey::Name => "name",
            SortKey::Time => "time",
        }
    }
}

/// Order the visible sequence. Stable: equal keys keep their incoming
/// relative order, which is catalog order since the earlier stages
/// preserve it.
pub fn apply(mut recipes: Vec<&Recipe>, sort: SortKey) -> Vec<&Recipe> {
    match sort {
        SortKey::Unsorted => {}
        // Case-insensitive only, not locale collation: accented titles
        // order by code point, not alphabet position. See DESIGN.md.
        SortKey::Name => recipes.sort_by_cached_key(|r| r.title.to_lowercase()),
        SortKey::Time => recipes.sort_by_key(|r| r.time),
    }
    recipes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Step};

    fn mk(id: u32, title: &str, time: u32) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            description: String::new(),
            category: None,
            difficulty: Difficulty::Easy,
            time,
            ingredients: vec![],
            steps: vec![Step::Leaf("Cook".to_string())],
        }
    }

    #[test]
    fn name_sort_ignores_case() {
        let all = vec![mk(1, "banana bread", 10), mk(2, "Apple pie", 20)];
        let out = apply(all.iter().collect(), SortKey::Name);
        let ids: Vec<u32> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn time_sort_is_numeric_not_lexicographic() {
        let all = vec![mk(1, "a", 100), mk(2, "b", 20), mk(3, "c", 3)];
        let out = apply(all.iter().collect(), SortKey::Time);
        let ids: Vec<u32> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn ties_keep_incoming_order() {
        let all = vec![mk(1, "Same", 30), mk(2, "same", 30), mk(3, "SAME", 30)];
        let by_name = apply(all.iter().collect(), SortKey::Name);
        let ids: Vec<u32> = by_name.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3]);

        let by_time = apply(all.iter().collect(), SortKey::Time);
        let ids: Vec<u32> = by_time.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn unsorted_preserves_input() {
        let all = vec![mk(3, "c", 1), mk(1, "a", 2), mk(2, "b", 3)];
        let out = apply(all.iter().collect(), SortKey::Unsorted);
        let ids: Vec<u32> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn unknown_sort_key_fails_open() {
        assert_eq!(SortKey::from_key("calories"), SortKey::Unsorted);
        assert_eq!(SortKey::from_key("name"), SortKey::Name);
    }
}
