//! Handlers for the `/movies` resource.
//!
//! Read-only views over the films dataset: a paginated listing and a
//! by-id detail lookup, both serving the same aggregate row shape.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use filmworks_core::error::CoreError;
use filmworks_core::pagination::{paginate, PAGE_SIZE};
use filmworks_core::types::DbId;
use filmworks_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::PageResponse;
use crate::state::AppState;

/// GET /api/v1/movies?page=1
///
/// List films in title order, 50 per page, wrapped in the pagination
/// envelope. An out-of-range page maps to 404.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1);

    let count = MovieRepo::count(&state.pool).await?;
    let info = paginate(count, page, PAGE_SIZE)?;

    let movies = MovieRepo::list_page(&state.pool, info.page_size, info.offset()).await?;
    Ok(Json(PageResponse::new(&info, movies)))
}

/// GET /api/v1/movies/{id}
///
/// Get a single film's aggregate row by exact id, or 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}
