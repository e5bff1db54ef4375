use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::districts::services::Provenance;
use crate::shared::types::Coordinate;

/// Request DTO for coordinate-to-district lookups.
///
/// Both fields are optional at the serde layer so that missing fields can
/// be reported with the exact required-fields list instead of a generic
/// deserialization error.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GetDistrictDto {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Response DTO for a resolved district
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DistrictResponseDto {
    pub success: bool,
    pub district: String,
    pub provenance: Provenance,
    pub fcm_topic: String,
    pub coordinates: Coordinate,
    pub timestamp: String,
}
