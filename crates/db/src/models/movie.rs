//! The aggregate movie row served by the `/movies` endpoints.

use serde::Serialize;
use sqlx::FromRow;

use filmworks_core::types::DbId;

/// A film flattened together with its de-duplicated genre names and
/// role-tagged person names.
///
/// Computed per request by the aggregate query in
/// [`crate::repositories::MovieRepo`]; never stored. The four name lists
/// are always present (possibly empty) and contain no duplicates. No
/// ordering is guaranteed within a list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: Option<chrono::NaiveDate>,
    pub rating: Option<f64>,
    /// Category label (`movie` or `tv_show`); serialized as `type`.
    #[serde(rename = "type")]
    pub film_type: String,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
}
