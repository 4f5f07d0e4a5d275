//! Shared response envelope types for API handlers.
//!
//! Paginated listings use the flat `{ count, total_pages, prev, next,
//! results }` envelope. Use [`PageResponse`] instead of ad-hoc
//! `serde_json::json!` maps to get compile-time type safety and consistent
//! serialization.

use serde::Serialize;

use filmworks_core::pagination::PageInfo;

/// Standard paginated response envelope.
///
/// `prev` and `next` are page numbers, serialized as `null` when the
/// neighbouring page does not exist.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub count: i64,
    pub total_pages: i64,
    pub prev: Option<i64>,
    pub next: Option<i64>,
    pub results: Vec<T>,
}

impl<T: Serialize> PageResponse<T> {
    /// Assemble the envelope from computed page bounds and the fetched rows.
    pub fn new(info: &PageInfo, results: Vec<T>) -> Self {
        Self {
            count: info.count,
            total_pages: info.total_pages,
            prev: info.prev,
            next: info.next,
            results,
        }
    }
}
