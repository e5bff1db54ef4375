use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::alerts::dtos::{SosRequestDto, SosResponseDto};
use crate::features::alerts::models::{AlertRequest, SenderInfo, SosKind};
use crate::features::alerts::services::message_builder::build_message;
use crate::features::districts::services::{DistrictResolver, ResolveInput};
use crate::features::notifications::services::NotificationPublisher;
use crate::shared::types::Coordinate;

/// Orchestrates the alert pipeline: validate, resolve district, normalize,
/// dispatch, respond. One dispatch attempt and one response per alert;
/// duplicate sos ids are not deduplicated here.
pub struct AlertService {
    resolver: Arc<dyn DistrictResolver>,
    publisher: Arc<dyn NotificationPublisher>,
}

impl AlertService {
    pub fn new(
        resolver: Arc<dyn DistrictResolver>,
        publisher: Arc<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            resolver,
            publisher,
        }
    }

    pub async fn handle(&self, dto: SosRequestDto) -> Result<SosResponseDto> {
        let request = self.validate(dto)?;

        let resolution = self
            .resolver
            .resolve(&ResolveInput {
                coordinate: request.coordinate,
                asserted_district: request.sender.district.clone(),
            })
            .await?;

        if resolution.is_degraded() {
            tracing::warn!(
                "District resolution degraded for sos {} (district={}, provenance={})",
                request.sos_id,
                resolution.district,
                resolution.provenance.as_str()
            );
        } else {
            tracing::debug!(
                "Resolved sos {} -> {} [{}]",
                request.sos_id,
                resolution.district,
                resolution.provenance.as_str()
            );
        }

        let message = build_message(&request, &resolution);
        let message_id = self.publisher.publish(&message).await?;

        let response_message = match request.kind {
            SosKind::SosAlert => "SOS alert sent successfully",
            SosKind::Stop => "SOS resolved notification sent successfully",
        };

        Ok(SosResponseDto {
            success: true,
            message: response_message.to_string(),
            message_id,
            sos_id: request.sos_id,
            district: resolution.district,
            topic: message.topic,
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Synthesize a canned alert and push it through the real pipeline.
    /// Manual-verification hook, not part of the production contract.
    pub async fn handle_test(&self) -> Result<SosResponseDto> {
        let dto = SosRequestDto {
            sos_id: Some(format!("test-{}", uuid::Uuid::new_v4())),
            sos_type: Some("sos_alert".to_string()),
            location: Some(Coordinate::new(12.9716, 77.5946)),
            user_info: Some(SenderInfo {
                name: Some("Test User".to_string()),
                location: None,
                district: Some("bengaluru_urban".to_string()),
            }),
            timestamp: None,
            sender_id: Some("test-sender".to_string()),
        };
        self.handle(dto).await
    }

    /// Shape checks that depend on the request alone plus which inputs the
    /// active resolver strategy needs.
    fn validate(&self, dto: SosRequestDto) -> Result<AlertRequest> {
        let mut missing = Vec::new();
        if dto.sos_id.as_deref().map_or(true, |s| s.trim().is_empty()) {
            missing.push("sos_id");
        }
        if dto.sos_type.as_deref().map_or(true, |s| s.trim().is_empty()) {
            missing.push("sos_type");
        }
        if self.resolver.requires_coordinate() && dto.location.is_none() {
            missing.push("location");
        }
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let kind = dto
            .sos_type
            .as_deref()
            .unwrap_or_default()
            .parse::<SosKind>()
            .map_err(AppError::Validation)?;

        Ok(AlertRequest {
            sos_id: dto.sos_id.unwrap_or_default(),
            kind,
            coordinate: dto.location,
            sender: dto.user_info.unwrap_or_default(),
            timestamp: dto.timestamp,
            sender_id: dto.sender_id,
        })
    }
}
