/// Errors raised while seeding the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read fixtures: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate wishlist id in fixtures: {0}")]
    DuplicateId(String),
}
