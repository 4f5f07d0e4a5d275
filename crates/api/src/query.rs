//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-number pagination parameters (`?page=`).
///
/// Pages are 1-based; a missing `page` means the first page. A value that
/// is not an integer is rejected by the `Query` extractor before the
/// handler runs.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}
