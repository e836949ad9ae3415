//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use partner_service::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    // Check database connectivity
    let db_healthy = state.pool().acquire().await.map(|_| true).unwrap_or(false);

    let response = ReadinessResponse::ready(db_healthy);
    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
