use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Active task store backend (`postgres` or `memory`).
    pub store: &'static str,
    /// Whether the task store is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and task store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.tasks.store();
    let db_healthy = store.health_check().await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store: store.backend(),
        db_healthy,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
