//! Alert normalizer: shapes a validated alert plus its resolved district
//! into the push message the dispatcher publishes.

use std::collections::BTreeMap;

use serde_json::json;

use crate::features::alerts::models::{AlertRequest, SosKind};
use crate::features::districts::services::Resolution;
use crate::features::notifications::models::{AndroidOptions, ApnsOptions, PushMessage};
use crate::shared::constants::ANONYMOUS_SENDER;
use crate::shared::slug::display_name;

/// Build the notification for an alert.
///
/// The resolved-kind message omits coordinate and sender details from the
/// data block; subscribers only need to know which incident cleared.
pub fn build_message(request: &AlertRequest, resolution: &Resolution) -> PushMessage {
    let place = request
        .sender
        .location
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| display_name(&resolution.district));

    let timestamp = request
        .timestamp
        .clone()
        .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());

    let sender_id = request
        .sender_id
        .clone()
        .unwrap_or_else(|| ANONYMOUS_SENDER.to_string());

    let mut data = BTreeMap::new();
    data.insert("type".to_string(), request.kind.data_type().to_string());
    data.insert("district".to_string(), resolution.district.clone());
    data.insert("sos_id".to_string(), request.sos_id.clone());
    data.insert("sender_id".to_string(), sender_id);
    data.insert("timestamp".to_string(), timestamp);

    let (title, body, android, apns) = match request.kind {
        SosKind::SosAlert => {
            if let Some(coordinate) = &request.coordinate {
                data.insert(
                    "location".to_string(),
                    json!({
                        "latitude": coordinate.latitude,
                        "longitude": coordinate.longitude,
                    })
                    .to_string(),
                );
            }
            data.insert("user_info".to_string(), json!(request.sender).to_string());

            let who = request
                .sender
                .name
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or("Someone");
            (
                "SOS Alert".to_string(),
                format!("{} needs urgent help near {}", who, place),
                AndroidOptions::alert(),
                ApnsOptions::alert(),
            )
        }
        SosKind::Stop => (
            "SOS Resolved".to_string(),
            format!("The emergency near {} has been marked as resolved", place),
            AndroidOptions::resolved(),
            ApnsOptions::resolved(),
        ),
    };

    PushMessage {
        topic: resolution.topic(),
        title,
        body,
        data,
        android,
        apns,
    }
}
