//! Read-only queries over `film_works` and its genre/person associations.
//!
//! Both `/movies` endpoints serve the same aggregate projection, so the
//! SELECT text is built once by [`aggregate_select`] and specialized with
//! an id filter or a pagination tail before execution.

use sqlx::PgPool;

use filmworks_core::roles::Role;
use filmworks_core::types::DbId;

use crate::models::movie::Movie;

/// Scalar film columns in the aggregate projection.
const FILM_COLUMNS: &str =
    "fw.id, fw.title, fw.description, fw.creation_date, fw.rating, fw.type AS film_type";

/// Distinct-genre projection. The IS NOT NULL filter drops the NULL row a
/// LEFT JOIN produces for films with no genres; COALESCE keeps the column
/// an array when the filter matches nothing.
const GENRE_NAMES: &str =
    "COALESCE(ARRAY_AGG(DISTINCT g.name) FILTER (WHERE g.name IS NOT NULL), '{}') AS genres";

/// Join chain shared by every aggregate query. LEFT JOINs keep films with
/// no genres or people in the result set.
const AGGREGATE_JOINS: &str = "\
    FROM film_works fw \
    LEFT JOIN genre_film_works gfw ON gfw.film_work_id = fw.id \
    LEFT JOIN genres g ON g.id = gfw.genre_id \
    LEFT JOIN person_film_works pfw ON pfw.film_work_id = fw.id \
    LEFT JOIN persons p ON p.id = pfw.person_id";

/// Distinct person-name projection for one role, aliased to the plural
/// column the [`Movie`] row expects (`actor` -> `actors`, …).
///
/// DISTINCT collapses duplicate association rows and same-named people;
/// COALESCE turns the NULL of an unmatched FILTER into an empty array so
/// every role list serializes as `[]` rather than `null`.
fn role_names(role: Role) -> String {
    format!(
        "COALESCE(ARRAY_AGG(DISTINCT p.full_name) FILTER (WHERE pfw.role = '{name}'), '{{}}') \
         AS {name}s",
        name = role.as_str()
    )
}

/// Build the aggregate SELECT shared by the list and detail queries.
///
/// One row per film: the scalar columns plus four de-duplicated name
/// lists. `filter` restricts the film set (`WHERE fw.id = $1`) and `tail`
/// orders or slices it (`ORDER BY … LIMIT $1 OFFSET $2`); grouping by the
/// primary key pulls the whole film row along.
fn aggregate_select(filter: &str, tail: &str) -> String {
    let name_lists = Role::ALL
        .iter()
        .map(|&role| role_names(role))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "SELECT {FILM_COLUMNS}, {GENRE_NAMES}, {name_lists} \
         {AGGREGATE_JOINS} {filter} GROUP BY fw.id {tail}"
    )
}

/// Provides the read-only movie queries behind the `/movies` endpoints.
pub struct MovieRepo;

impl MovieRepo {
    /// Count all films. The aggregate query yields one row per film, so
    /// this is also the total row count for pagination.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM film_works")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Fetch one page of aggregate rows, ordered by title then id so page
    /// slices are deterministic.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = aggregate_select("", "ORDER BY fw.title, fw.id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Fetch a single film's aggregate row by exact id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = aggregate_select("WHERE fw.id = $1", "");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
