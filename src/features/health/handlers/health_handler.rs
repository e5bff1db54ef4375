//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::core::config::ResolverStrategy;
use crate::shared::constants::SERVICE_NAME;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponseDto {
    pub status: &'static str,
    pub service: &'static str,
    pub strategy: &'static str,
    pub timestamp: String,
}

/// Liveness probe, reports the active resolver strategy
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponseDto)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(strategy): State<ResolverStrategy>,
) -> Json<HealthResponseDto> {
    Json(HealthResponseDto {
        status: "ok",
        service: SERVICE_NAME,
        strategy: strategy.as_str(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
