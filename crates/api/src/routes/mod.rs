pub mod health;
pub mod wishlist;

use axum::Router;

use crate::state::AppState;

/// Build the service route tree.
///
/// ```text
/// /health                                  service health
/// /wishlist/{wishlist_id}/updates          update status (GET)
/// /wishlist/{wishlist_id}/view             mark as viewed (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(wishlist::router())
}
