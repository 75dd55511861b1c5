//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use wishlist_api::error::AppError;
use wishlist_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn wishlist_not_found_returns_404_with_id() {
    let err = AppError::from(CoreError::WishlistNotFound {
        wishlist_id: "abc".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Wishlist not found");
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["wishlistId"], "abc");
}

#[test]
fn app_error_displays_core_message() {
    let err = AppError::from(CoreError::WishlistNotFound {
        wishlist_id: "abc".into(),
    });
    assert_eq!(err.to_string(), "Wishlist not found: abc");
}
