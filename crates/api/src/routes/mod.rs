pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies              paginated film listing (GET)
/// /movies/{id}         film detail by id (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Film listing and detail.
        .nest("/movies", movies::router())
}
