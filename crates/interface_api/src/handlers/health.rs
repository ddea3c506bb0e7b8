//! Health check handlers

use axum::{extract::State, Json};
use tracing::warn;

use core_kernel::HealthCheckable;

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check (includes the claim store)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let health = state.service.store().health_check().await;
    if !health.is_healthy() {
        warn!(adapter = %health.adapter_id, message = ?health.message, "Claim store not ready");
        return Err(ApiError::Unavailable(
            health.message.unwrap_or_else(|| "Claim store unavailable".to_string()),
        ));
    }

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
