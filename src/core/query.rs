//! Query parameters and pagination utilities

use serde::{Deserialize, Serialize};

use crate::config::ListingConfig;

/// Pagination parameters extracted from URL query strings.
///
/// All parameters have sensible defaults.
///
/// # Example
/// ```rust,ignore
/// // Usage:
/// GET /tickets?page=2&limit=10
/// GET /invoices?page=1&limit=20&status=unpaid&sort=due
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl Pagination {
    /// Build from optional query parameters, falling back to the listing
    /// configuration for the per-page default and ceiling
    pub fn from_parts(page: Option<usize>, limit: Option<usize>, listing: &ListingConfig) -> Self {
        Self {
            page: page.unwrap_or(1),
            limit: limit
                .unwrap_or(listing.default_limit)
                .min(listing.max_limit),
        }
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, ensuring it doesn't exceed the maximum
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100) // Maximum 100 per page, minimum 1
    }

    /// Slice an already filtered and sorted collection into the requested
    /// page, returning the page together with its metadata
    pub fn slice<T>(&self, records: Vec<T>) -> (Vec<T>, PageMeta) {
        let total = records.len();
        let meta = PageMeta::new(self.page(), self.limit(), total);
        let start = (self.page() - 1) * self.limit();

        let page = records
            .into_iter()
            .skip(start)
            .take(self.limit())
            .collect();

        (page, meta)
    }
}

/// Paginated response structure
///
/// This structure wraps paginated data with metadata about pagination state.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PageMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit is at least 1 to avoid division by zero
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }
}
