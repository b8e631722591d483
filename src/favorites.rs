use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

use log::{debug, warn};

use crate::error::BrowseError;

/// Persistence boundary for the favorites set. The whole set is written
/// on every mutation; there is no incremental form.
pub trait FavoritesStore {
    fn load(&self) -> Result<HashSet<u32>, BrowseError>;
    fn save(&mut self, favorites: &HashSet<u32>) -> Result<(), BrowseError>;
}

/// File-backed store holding a single JSON array of recipe ids, the
/// direct analogue of a one-key browser storage slot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FavoritesStore for JsonFileStore {
    /// Absent or malformed content loads as the empty set, never an
    /// error.
    fn load(&self) -> Result<HashSet<u32>, BrowseError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str::<Vec<u32>>(&raw) {
            Ok(ids) => Ok(ids.into_iter().collect()),
            Err(e) => {
                warn!(
                    "malformed favorites file {}: {e}; starting with empty set",
                    self.path.display()
                );
                Ok(HashSet::new())
            }
        }
    }

    fn save(&mut self, favorites: &HashSet<u32>) -> Result<(), BrowseError> {
        // Sorted on disk so repeated saves of the same set are identical
        let mut ids: Vec<u32> = favorites.iter().copied().collect();
        ids.sort_unstable();
        fs::write(&self.path, serde_json::to_string(&ids)?)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions. Clones share the
/// same blob, so a re-opened ledger sees earlier saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Rc<RefCell<Option<String>>>,
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> Result<HashSet<u32>, BrowseError> {
        match self.blob.borrow().as_deref() {
            None => Ok(HashSet::new()),
            Some(raw) => match serde_json::from_str::<Vec<u32>>(raw) {
                Ok(ids) => Ok(ids.into_iter().collect()),
                Err(e) => {
                    warn!("malformed favorites blob: {e}; starting with empty set");
                    Ok(HashSet::new())
                }
            },
        }
    }

    fn save(&mut self, favorites: &HashSet<u32>) -> Result<(), BrowseError> {
        let mut ids: Vec<u32> = favorites.iter().copied().collect();
        ids.sort_unstable();
        *self.blob.borrow_mut() = Some(serde_json::to_string(&ids)?);
        Ok(())
    }
}

impl MemoryStore {
    /// Seed the blob directly, e.g. with malformed content in tests.
    pub fn with_blob(raw: impl Into<String>) -> Self {
        Self {
            blob: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }
}

/// The set of recipe ids the user has marked favorite. Membership only,
/// no ordering. Ids that no longer match a catalog entry are tolerated;
/// they just never match anything visible.
pub struct FavoritesLedger {
    favorites: HashSet<u32>,
    store: Box<dyn FavoritesStore>,
}

impl FavoritesLedger {
    /// Open a ledger over a store, loading whatever was persisted.
    /// A store that cannot be read at all yields an empty ledger.
    pub fn open(store: impl FavoritesStore + 'static) -> Self {
        let favorites = match store.load() {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!("failed to load favorites: {e}; starting with empty set");
                HashSet::new()
            }
        };
        debug!("favorites loaded: {} ids", favorites.len());
        Self {
            favorites,
            store: Box::new(store),
        }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    /// Flip membership for an id and persist the whole set. Returns the
    /// new membership state.
    pub fn toggle(&mut self, id: u32) -> Result<bool, BrowseError> {
        let now_favorite = if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        };
        self.store.save(&self.favorites)?;
        Ok(now_favorite)
    }

    pub fn ids(&self) -> &HashSet<u32> {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}
