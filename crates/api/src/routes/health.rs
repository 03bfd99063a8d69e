use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// Database reachability payload.
#[derive(Serialize)]
pub struct DbHealthResponse {
    pub status: &'static str,
    pub db_healthy: bool,
}

/// GET /health -- process liveness, never touches the database.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health/db -- pings the reader and writer pools.
async fn db_health(State(state): State<AppState>) -> (StatusCode, Json<DbHealthResponse>) {
    match state.db.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(DbHealthResponse {
                status: "ok",
                db_healthy: true,
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(DbHealthResponse {
                    status: "degraded",
                    db_healthy: false,
                }),
            )
        }
    }
}

/// Mount health check routes (root level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/db", get(db_health))
}
