//! Page windowing over ordered result lists

use serde::Deserialize;

/// Default items per page
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed). Values below 1 select nothing.
    pub page: i64,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination for a page of `per_page` items.
    ///
    /// Per page is clamped to a minimum of 1; the page number is kept as
    /// given so that out-of-range pages produce an empty window.
    pub fn new(page: i64, per_page: u32) -> Self {
        Self {
            page,
            per_page: per_page.max(1),
        }
    }

    /// Number of leading items skipped, or `None` for pages below 1.
    pub fn offset(&self) -> Option<usize> {
        if self.page < 1 {
            return None;
        }
        let offset = (self.page - 1).saturating_mul(i64::from(self.per_page));
        Some(usize::try_from(offset).unwrap_or(usize::MAX))
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> usize {
        self.per_page as usize
    }

    /// Take this page's window out of an ordered list, preserving order.
    pub fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        match self.offset() {
            Some(offset) => items.into_iter().skip(offset).take(self.limit()).collect(),
            None => Vec::new(),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Query parameters for pagination.
///
/// `page` is kept as raw text: anything that is not an integer reads as
/// page 1 instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl PaginationParams {
    /// Requested page number, defaulting to 1.
    pub fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }

    /// Resolve against the configured page size.
    pub fn with_per_page(&self, per_page: u32) -> Pagination {
        Pagination::new(self.page_number(), per_page)
    }
}
