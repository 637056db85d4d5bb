//! Service routes outside the ledger API.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize, Default)]
struct Status {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'static str>,
}

async fn health() -> Json<Status> {
    Json(Status {
        status: "ok",
        ..Status::default()
    })
}

/// 503 while the pool cannot reach PostgreSQL.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Status>) {
    let (code, status, database) = match state.queries.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };
    let body = Status {
        status,
        database: Some(database),
        ..Status::default()
    };
    (code, Json(body))
}

async fn version() -> Json<Status> {
    Json(Status {
        status: "ok",
        name: Some(env!("CARGO_PKG_NAME")),
        version: Some(env!("CARGO_PKG_VERSION")),
        ..Status::default()
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
