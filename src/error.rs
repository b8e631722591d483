use thiserror::Error;

/// Errors that can occur while loading the catalog or persisting favorites.
///
/// Presentation-side failures (unknown filter keys, malformed favorites
/// blobs) deliberately never surface here; those paths recover to a
/// default instead.
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Failed to read or write a backing file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse catalog or favorites JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A recipe id appears more than once in the catalog
    #[error("Duplicate recipe id {0} in catalog")]
    DuplicateRecipeId(u32),
}
