//! Health routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (session store answers)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the session store answers a snapshot read.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    state.engine.session_snapshot().await;
    StatusCode::OK
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    // An in-memory session can only degrade if the lock is poisoned, which
    // tokio's RwLock rules out; reading the snapshot confirms liveness.
    state.engine.session_snapshot().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        session: "ok".to_string(),
        connections: state.ws_connection_count().await,
        last_event_at: state.engine.last_event_at().map(|t| t.to_rfc3339()),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
