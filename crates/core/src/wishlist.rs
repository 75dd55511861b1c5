//! Wishlist records and update detection.
//!
//! A product has an update relative to its wishlist when it carries at least
//! one status flag and its `changed_at_date` is strictly later than the
//! wishlist's `last_seen_at`. Everything here is pure; the store decides
//! where records live and when `now` is.

use chrono::SubsecRound;
use serde::{Deserialize, Serialize};

use crate::status::ChangeStatus;
use crate::types::{RecordedTime, Timestamp};

/// Message returned after a wishlist is marked as viewed.
pub const VIEWED_MESSAGE: &str = "Wishlist last seen date updated";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A product on a wishlist together with its latest status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    /// Active status flags. Empty means nothing has changed.
    #[serde(default)]
    pub change_in_status: Vec<ChangeStatus>,
    /// When the flags were last set, as recorded.
    #[serde(default, skip_serializing_if = "RecordedTime::is_missing")]
    pub changed_at_date: RecordedTime,
}

impl Product {
    /// Whether this product changed after `last_seen_at`.
    ///
    /// A missing `last_seen_at` counts as the Unix epoch. An unparseable
    /// date on either side never counts as a change.
    pub fn has_update_since(&self, last_seen_at: &RecordedTime) -> bool {
        if self.change_in_status.is_empty() {
            return false;
        }
        let Some(changed_at) = self.changed_at_date.instant() else {
            return false;
        };
        match last_seen_at {
            RecordedTime::Missing => changed_at > Timestamp::UNIX_EPOCH,
            RecordedTime::At { instant, .. } => changed_at > *instant,
            RecordedTime::Unparsed(_) => false,
        }
    }
}

/// A wishlist and the time its owner last looked at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    pub wishlist_id: String,
    #[serde(default)]
    pub last_seen_at: RecordedTime,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Wishlist {
    /// Products that changed since the wishlist was last seen, in stored order.
    pub fn updated_products(&self) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |p| p.has_update_since(&self.last_seen_at))
    }

    pub fn has_updates(&self) -> bool {
        self.updated_products().next().is_some()
    }

    /// Snapshot of the wishlist's update state.
    pub fn updates(&self) -> WishlistUpdates {
        let updated_products: Vec<Product> = self.updated_products().cloned().collect();
        WishlistUpdates {
            wishlist_id: self.wishlist_id.clone(),
            last_seen_at: self.last_seen_at.clone(),
            has_updates: !updated_products.is_empty(),
            updated_products,
            products: self.products.clone(),
        }
    }

    /// Record that the wishlist was viewed at `now` and return the stored value.
    ///
    /// `now` is truncated to millisecond precision. A valid stored value
    /// never moves backwards, so a clock step behind it leaves it unchanged.
    /// Missing or unparseable values are always replaced.
    pub fn mark_seen(&mut self, now: Timestamp) -> RecordedTime {
        let now = now.trunc_subsecs(3);
        let keep_previous = matches!(
            self.last_seen_at.instant(),
            Some(previous) if previous > now
        );
        if !keep_previous {
            self.last_seen_at = RecordedTime::from_instant(now);
        }
        self.last_seen_at.clone()
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Update status of a wishlist as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistUpdates {
    pub wishlist_id: String,
    pub last_seen_at: RecordedTime,
    pub has_updates: bool,
    pub updated_products: Vec<Product>,
    /// The full, unfiltered product list.
    pub products: Vec<Product>,
}

/// Result of marking a wishlist as viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewedReceipt {
    pub wishlist_id: String,
    pub last_seen_at: RecordedTime,
    pub message: &'static str,
}

impl ViewedReceipt {
    pub fn new(wishlist_id: impl Into<String>, last_seen_at: RecordedTime) -> Self {
        Self {
            wishlist_id: wishlist_id.into(),
            last_seen_at,
            message: VIEWED_MESSAGE,
        }
    }
}
