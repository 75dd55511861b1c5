use std::sync::Arc;

use wishlist_store::WishlistStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory wishlist records.
    pub store: Arc<WishlistStore>,
}

impl AppState {
    pub fn new(store: WishlistStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
