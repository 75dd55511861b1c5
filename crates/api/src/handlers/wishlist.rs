//! Handlers for wishlist update status and the mark-viewed action.
//!
//! Neither route reads a request body; anything sent is ignored.

use axum::extract::{Path, State};
use axum::Json;
use wishlist_core::wishlist::{ViewedReceipt, WishlistUpdates};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /wishlist/{wishlist_id}/updates
///
/// Report which products changed since the wishlist was last seen.
pub async fn get_updates(
    State(state): State<AppState>,
    Path(wishlist_id): Path<String>,
) -> AppResult<Json<WishlistUpdates>> {
    let updates = state.store.find_updates(&wishlist_id).await?;

    tracing::debug!(
        wishlist_id = %updates.wishlist_id,
        has_updates = updates.has_updates,
        updated = updates.updated_products.len(),
        "Wishlist updates computed",
    );

    Ok(Json(updates))
}

/// POST /wishlist/{wishlist_id}/view
///
/// Set the wishlist's `lastSeenAt` to the current time.
pub async fn mark_viewed(
    State(state): State<AppState>,
    Path(wishlist_id): Path<String>,
) -> AppResult<Json<ViewedReceipt>> {
    let receipt = state.store.mark_viewed(&wishlist_id).await?;
    Ok(Json(receipt))
}
