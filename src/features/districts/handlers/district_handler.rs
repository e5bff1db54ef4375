//! Coordinate-to-district lookup handler

use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::districts::dtos::{DistrictResponseDto, GetDistrictDto};
use crate::features::districts::services::{DistrictResolver, ResolveInput};
use crate::shared::types::Coordinate;

/// Resolve a coordinate to its district and FCM topic
///
/// Exposed for clients that want to subscribe to a district topic before
/// ever sending an alert.
#[utoipa::path(
    post,
    path = "/get-district",
    request_body = GetDistrictDto,
    responses(
        (status = 200, description = "District resolved", body = DistrictResponseDto),
        (status = 400, description = "Missing or out-of-range coordinates")
    ),
    tag = "districts"
)]
pub async fn get_district(
    State(resolver): State<Arc<dyn DistrictResolver>>,
    AppJson(dto): AppJson<GetDistrictDto>,
) -> Result<Json<DistrictResponseDto>> {
    let coordinate = match (dto.latitude, dto.longitude) {
        (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude),
        (latitude, longitude) => {
            let mut missing = Vec::new();
            if latitude.is_none() {
                missing.push("latitude");
            }
            if longitude.is_none() {
                missing.push("longitude");
            }
            return Err(AppError::MissingFields(missing));
        }
    };
    coordinate
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let resolution = resolver
        .resolve(&ResolveInput {
            coordinate: Some(coordinate),
            asserted_district: None,
        })
        .await?;

    Ok(Json(DistrictResponseDto {
        success: true,
        district: resolution.district.clone(),
        provenance: resolution.provenance,
        fcm_topic: resolution.topic(),
        coordinates: coordinate,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
