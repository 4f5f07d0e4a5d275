//! Route definitions for the movies resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes mounted at `/movies`.
///
/// Only GET is routed; other methods on these paths get 405 from the
/// framework.
///
/// ```text
/// GET /            -> list
/// GET /{id}        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list))
        .route("/{id}", get(movies::get_by_id))
}
