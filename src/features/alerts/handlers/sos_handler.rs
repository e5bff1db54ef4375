//! SOS alert handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::alerts::dtos::{SosRequestDto, SosResponseDto};
use crate::features::alerts::services::AlertService;

/// Accept an SOS alert and fan it out to the district topic
#[utoipa::path(
    post,
    path = "/sos",
    request_body = SosRequestDto,
    responses(
        (status = 200, description = "Alert dispatched", body = SosResponseDto),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Notification delivery failed")
    ),
    tag = "alerts"
)]
pub async fn send_sos(
    State(service): State<Arc<AlertService>>,
    AppJson(dto): AppJson<SosRequestDto>,
) -> Result<Json<SosResponseDto>> {
    let response = service.handle(dto).await?;
    Ok(Json(response))
}

/// Dispatch a canned test alert through the real pipeline
///
/// Manual-verification hook for deployments; not part of the production
/// contract.
#[utoipa::path(
    post,
    path = "/test-sos",
    responses(
        (status = 200, description = "Test alert dispatched", body = SosResponseDto),
        (status = 500, description = "Notification delivery failed")
    ),
    tag = "alerts"
)]
pub async fn test_sos(
    State(service): State<Arc<AlertService>>,
) -> Result<Json<SosResponseDto>> {
    let response = service.handle_test().await?;
    Ok(Json(response))
}
