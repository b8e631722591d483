use std::collections::HashSet;
use std::io::Read;

use log::debug;

use crate::error::BrowseError;
use crate::model::Recipe;

/// The fixed, ordered collection of all recipes. Loaded once at startup
/// and never mutated; every downstream stage borrows from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog from an already-ordered recipe sequence.
    /// Ids must be unique; order is preserved as given.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, BrowseError> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(BrowseError::DuplicateRecipeId(recipe.id));
            }
        }
        debug!("catalog loaded with {} recipes", recipes.len());
        Ok(Self { recipes })
    }

    /// Load a catalog from a JSON array of recipe records.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, BrowseError> {
        let recipes: Vec<Recipe> = serde_json::from_reader(reader)?;
        Self::new(recipes)
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}
