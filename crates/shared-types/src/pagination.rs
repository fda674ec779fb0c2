//! # Pagination Contract
//!
//! Paginating list endpoints return `{ data, pagination }`; callers request
//! `page`/`limit` and must not assume all results arrive in one page unless
//! `limit` is known to exceed the total count.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page.
    pub data: Vec<T>,
    /// Position of this page within the full result set.
    pub pagination: PageInfo,
}

/// Position metadata for a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Total records across all pages.
    pub total: u64,
    /// 1-based page number of this page.
    pub page: u32,
    /// Requested page size.
    pub limit: u32,
    /// Total number of pages at this limit.
    pub total_pages: u32,
}

/// Query parameters for requesting a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl PageRequest {
    /// First page at the given size.
    #[must_use]
    pub const fn first(limit: u32) -> Self {
        Self { page: 1, limit }
    }

    /// Render as query-string pairs.
    #[must_use]
    pub fn to_query(self) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}
