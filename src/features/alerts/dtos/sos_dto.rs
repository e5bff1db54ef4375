use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::alerts::models::SenderInfo;
use crate::shared::types::Coordinate;

/// Request DTO for `/sos`.
///
/// Required fields are optional at the serde layer so a missing `sos_id` or
/// `sos_type` produces a 400 with the exact required-fields list instead of
/// a generic deserialization error. `sos_type` stays a string here; it is
/// parsed into [`crate::features::alerts::models::SosKind`] during
/// validation so an invalid value gets its own message.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct SosRequestDto {
    pub sos_id: Option<String>,

    pub sos_type: Option<String>,

    #[validate(nested)]
    pub location: Option<Coordinate>,

    #[serde(rename = "userInfo")]
    pub user_info: Option<SenderInfo>,

    pub timestamp: Option<String>,

    pub sender_id: Option<String>,
}

/// Response DTO for a dispatched alert
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SosResponseDto {
    pub success: bool,
    pub message: String,
    #[serde(rename = "messageId")]
    pub message_id: String,
    #[serde(rename = "sosId")]
    pub sos_id: String,
    pub district: String,
    pub topic: String,
    pub timestamp: String,
}
