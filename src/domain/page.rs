//! Paging for list-style RPCs.
//!
//! Address and name queries return a `total` count plus a server-defined
//! page of entries selected by `limit` and `offset`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_NAME_HISTORY_LIMIT, DEFAULT_OFFSET, DEFAULT_UNSPENT_LIMIT,
};

// ============================================================================
// Paging
// ============================================================================

/// Page selection for list-style RPCs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Paging {
    /// Maximum number of entries to return.
    pub limit: u32,
    /// Number of entries to skip.
    pub offset: u32,
}

impl Paging {
    /// Default page for `list_unspent`.
    pub const UNSPENT: Self = Self::new(DEFAULT_UNSPENT_LIMIT, DEFAULT_OFFSET);

    /// Default page for `address_history`.
    pub const HISTORY: Self = Self::new(DEFAULT_HISTORY_LIMIT, DEFAULT_OFFSET);

    /// Default page for `get_name_history`.
    pub const NAME_HISTORY: Self = Self::new(DEFAULT_NAME_HISTORY_LIMIT, DEFAULT_OFFSET);

    /// Create a page selection.
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// The page following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }

    /// Query parameters in wire order.
    pub(crate) fn query(self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

// ============================================================================
// Page
// ============================================================================

/// A page of results with the total number of entries available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Total number of entries across all pages.
    pub total: u64,
    /// The page's entries, keyed as the server sends them.
    #[serde(flatten)]
    pub entries: Map<String, Value>,
}

impl Page {
    /// Whether entries exist beyond the page fetched with `paging`.
    #[must_use]
    pub fn has_more(&self, paging: Paging) -> bool {
        u64::from(paging.offset) + u64::from(paging.limit) < self.total
    }
}

// ============================================================================
// Tests
// ============================================================================
