pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod favorites;
pub mod highlight;
pub mod model;
pub mod query;
pub mod session;
pub mod steps;
pub mod view;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use debounce::{Clock, Debouncer, ManualClock, SystemClock};
pub use error::BrowseError;
pub use favorites::{FavoritesLedger, FavoritesStore, JsonFileStore, MemoryStore};
pub use highlight::{highlight, HighlightedText, Segment};
pub use model::{Difficulty, Recipe, Step};
pub use query::{visible, Filter, QueryState, SortKey};
pub use session::BrowseSession;
pub use steps::RenderedStep;
pub use view::{compose, BrowseView, RecipeCard};
