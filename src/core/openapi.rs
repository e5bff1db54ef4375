use utoipa::{Modify, OpenApi};

use crate::features::alerts::dtos as alerts_dtos;
use crate::features::alerts::handlers as alerts_handlers;
use crate::features::alerts::models as alerts_models;
use crate::features::districts::dtos as districts_dtos;
use crate::features::districts::handlers as districts_handlers;
use crate::features::districts::services::Provenance;
use crate::features::health::handlers as health_handlers;
use crate::shared::types::Coordinate;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health_handlers::health_handler::health_check,
        // Alerts
        alerts_handlers::sos_handler::send_sos,
        alerts_handlers::sos_handler::test_sos,
        // Districts
        districts_handlers::district_handler::get_district,
    ),
    components(
        schemas(
            Coordinate,
            Provenance,
            alerts_models::SosKind,
            alerts_models::SenderInfo,
            alerts_dtos::SosRequestDto,
            alerts_dtos::SosResponseDto,
            districts_dtos::GetDistrictDto,
            districts_dtos::DistrictResponseDto,
            health_handlers::HealthResponseDto,
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "alerts", description = "SOS alert intake and fan-out"),
        (name = "districts", description = "Coordinate-to-district resolution"),
    ),
    info(
        title = "Suraksha API",
        version = "0.1.0",
        description = "SOS alert relay: district resolution and push fan-out",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
