use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount wishlist routes at the root, matching the paths clients call.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/wishlist/{wishlist_id}/updates",
            get(handlers::wishlist::get_updates),
        )
        .route(
            "/wishlist/{wishlist_id}/view",
            post(handlers::wishlist::mark_viewed),
        )
}
