//! Root-level health probe.
//!
//! Deployment probes hit this outside the `/api/v1` prefix, so the route
//! is merged at the router root rather than nested with the movie routes.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload for `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database answers, `"degraded"` otherwise.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database answered the probe query.
    pub db_healthy: bool,
}

/// Report service liveness and database reachability.
///
/// Always answers 200; a dead database flips `status` to `"degraded"`
/// rather than failing the request, so probes can tell "server down"
/// apart from "server up, storage unreachable".
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = filmworks_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
