#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Wishlist not found: {wishlist_id}")]
    WishlistNotFound { wishlist_id: String },
}
