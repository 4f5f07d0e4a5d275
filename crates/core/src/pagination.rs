//! Page-number pagination math for list endpoints.
//!
//! Pure arithmetic only: callers supply the total row count (from a COUNT
//! query) and get back validated navigation metadata plus the LIMIT/OFFSET
//! values to slice the result set with.

use crate::error::CoreError;

/// Number of aggregate rows per page on paginated list endpoints.
pub const PAGE_SIZE: i64 = 50;

// ---------------------------------------------------------------------------
// Page metadata
// ---------------------------------------------------------------------------

/// Navigation metadata for one page of a result set.
///
/// Produced by [`paginate`]; the `page` field is always within
/// `1..=total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Total number of rows across all pages.
    pub count: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// The validated 1-based page number.
    pub page: i64,
    /// Rows per page.
    pub page_size: i64,
    /// Previous page number, absent on the first page.
    pub prev: Option<i64>,
    /// Next page number, absent on the last page.
    pub next: Option<i64>,
}

impl PageInfo {
    /// Row offset of the first row on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

// ---------------------------------------------------------------------------
// Pagination logic
// ---------------------------------------------------------------------------

/// Total number of pages needed for `count` rows at `page_size` per page.
///
/// An empty result set still has one (empty) page, so page 1 stays
/// addressable on an empty dataset.
pub fn total_pages(count: i64, page_size: i64) -> i64 {
    if count == 0 {
        return 1;
    }
    (count + page_size - 1) / page_size
}

/// Validate `page` against `count` total rows and compute its navigation
/// metadata.
///
/// Fails with [`CoreError::PageOutOfRange`] when `page` falls outside
/// `1..=total_pages`.
pub fn paginate(count: i64, page: i64, page_size: i64) -> Result<PageInfo, CoreError> {
    let total_pages = total_pages(count, page_size);
    if page < 1 || page > total_pages {
        return Err(CoreError::PageOutOfRange { page, total_pages });
    }

    let prev = if page > 1 { Some(page - 1) } else { None };
    let next = if page < total_pages { Some(page + 1) } else { None };

    Ok(PageInfo {
        count,
        total_pages,
        page,
        page_size,
        prev,
        next,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
