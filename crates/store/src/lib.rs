//! In-memory wishlist store.
//!
//! Records are seeded once at startup and live for the lifetime of the
//! process. The only mutation is a wishlist's `last_seen_at` moving forward
//! when it is marked as viewed.

pub mod error;
pub mod fixtures;

use std::collections::HashMap;
use std::path::Path;

use tokio::sync::RwLock;
use wishlist_core::error::CoreError;
use wishlist_core::types::Timestamp;
use wishlist_core::wishlist::{ViewedReceipt, Wishlist, WishlistUpdates};

pub use error::StoreError;

/// Owns every wishlist record.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across handlers. Reads take the read lock, so a query always sees
/// one consistent version of a record. Marking as viewed takes the write
/// lock, which serializes updates to `last_seen_at`.
#[derive(Debug)]
pub struct WishlistStore {
    records: RwLock<HashMap<String, Wishlist>>,
}

impl WishlistStore {
    /// Build a store from records, rejecting duplicate identifiers.
    pub fn new(wishlists: impl IntoIterator<Item = Wishlist>) -> Result<Self, StoreError> {
        let mut records = HashMap::new();
        for wishlist in wishlists {
            let id = wishlist.wishlist_id.clone();
            if records.insert(id.clone(), wishlist).is_some() {
                return Err(StoreError::DuplicateId(id));
            }
        }
        Ok(Self {
            records: RwLock::new(records),
        })
    }

    /// Store seeded with the built-in fixtures.
    pub fn seeded() -> Result<Self, StoreError> {
        Self::new(fixtures::builtin()?)
    }

    /// Store seeded from `path` if given, otherwise from the built-in fixtures.
    pub fn load(path: Option<&Path>) -> Result<Self, StoreError> {
        match path {
            Some(path) => {
                let wishlists = fixtures::from_file(path)?;
                tracing::info!(path = %path.display(), "Loaded wishlist fixtures from file");
                Self::new(wishlists)
            }
            None => Self::seeded(),
        }
    }

    /// Number of wishlists held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Update status of a wishlist. Read-only.
    pub async fn find_updates(&self, wishlist_id: &str) -> Result<WishlistUpdates, CoreError> {
        let records = self.records.read().await;
        let wishlist = records
            .get(wishlist_id)
            .ok_or_else(|| not_found(wishlist_id))?;
        Ok(wishlist.updates())
    }

    /// Mark a wishlist as viewed now.
    pub async fn mark_viewed(&self, wishlist_id: &str) -> Result<ViewedReceipt, CoreError> {
        self.mark_viewed_at(wishlist_id, chrono::Utc::now()).await
    }

    /// Mark a wishlist as viewed at an explicit instant.
    pub async fn mark_viewed_at(
        &self,
        wishlist_id: &str,
        now: Timestamp,
    ) -> Result<ViewedReceipt, CoreError> {
        let mut records = self.records.write().await;
        let wishlist = records
            .get_mut(wishlist_id)
            .ok_or_else(|| not_found(wishlist_id))?;

        let last_seen_at = wishlist.mark_seen(now);
        tracing::info!(wishlist_id, %last_seen_at, "Wishlist marked as viewed");

        Ok(ViewedReceipt::new(wishlist_id, last_seen_at))
    }
}

fn not_found(wishlist_id: &str) -> CoreError {
    CoreError::WishlistNotFound {
        wishlist_id: wishlist_id.to_string(),
    }
}
