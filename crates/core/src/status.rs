//! Product status-change flags.
//!
//! The set of flags is open: upstream trackers may introduce new ones, so
//! unrecognized strings are kept verbatim instead of being rejected.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_SALE: &str = "Sale";
pub const STATUS_NOT_ON_SALE: &str = "NotOnSale";
pub const STATUS_NO_STOCK: &str = "NoStock";
pub const STATUS_LOW_STOCK: &str = "LowStock";
pub const STATUS_BACK_IN_STOCK: &str = "BackInStock";
pub const STATUS_HIGH_STOCK: &str = "HighStock";

/// All well-known status strings.
pub const KNOWN_STATUSES: &[&str] = &[
    STATUS_SALE,
    STATUS_NOT_ON_SALE,
    STATUS_NO_STOCK,
    STATUS_LOW_STOCK,
    STATUS_BACK_IN_STOCK,
    STATUS_HIGH_STOCK,
];

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

/// A single status-change flag carried by a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeStatus {
    Sale,
    NotOnSale,
    NoStock,
    LowStock,
    BackInStock,
    HighStock,
    /// A flag this service does not know about, preserved as received.
    Other(String),
}

impl ChangeStatus {
    /// Convert from the wire string value.
    pub fn from_str_value(s: &str) -> Self {
        match s {
            STATUS_SALE => Self::Sale,
            STATUS_NOT_ON_SALE => Self::NotOnSale,
            STATUS_NO_STOCK => Self::NoStock,
            STATUS_LOW_STOCK => Self::LowStock,
            STATUS_BACK_IN_STOCK => Self::BackInStock,
            STATUS_HIGH_STOCK => Self::HighStock,
            other => Self::Other(other.to_string()),
        }
    }

    /// Convert to the wire string value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sale => STATUS_SALE,
            Self::NotOnSale => STATUS_NOT_ON_SALE,
            Self::NoStock => STATUS_NO_STOCK,
            Self::LowStock => STATUS_LOW_STOCK,
            Self::BackInStock => STATUS_BACK_IN_STOCK,
            Self::HighStock => STATUS_HIGH_STOCK,
            Self::Other(s) => s.as_str(),
        }
    }

    /// Whether this is one of the well-known flags.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ChangeStatus {
    fn from(s: String) -> Self {
        Self::from_str_value(&s)
    }
}

impl From<ChangeStatus> for String {
    fn from(status: ChangeStatus) -> Self {
        match status {
            ChangeStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
