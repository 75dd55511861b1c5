use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wishlist_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `wishlist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::WishlistNotFound { wishlist_id }) => {
                tracing::debug!(%wishlist_id, "Wishlist not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": "Wishlist not found",
                        "code": "NOT_FOUND",
                        "wishlistId": wishlist_id,
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
