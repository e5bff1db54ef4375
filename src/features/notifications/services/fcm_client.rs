use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::core::config::FcmConfig;
use crate::core::error::{AppError, Result};
use crate::features::notifications::models::PushMessage;

/// Topic publish capability. The single production implementation talks to
/// FCM; tests substitute a recording stub.
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    /// Publish the message to its topic, returning the transport's message
    /// id. Fails with [`AppError::Delivery`]; no retry is performed here.
    async fn publish(&self, message: &PushMessage) -> Result<String>;
}

/// FCM legacy HTTP API response for a topic send.
#[derive(Debug, Deserialize)]
struct FcmSendResponse {
    message_id: Option<serde_json::Value>,
    error: Option<String>,
}

/// Service for publishing notifications through the FCM topic-send API
pub struct FcmClient {
    client: reqwest::Client,
    endpoint: String,
    server_key: String,
}

impl FcmClient {
    pub fn new(config: &FcmConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("SurakshaCore/0.1 (sos-alert-relay)")
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: config.endpoint.clone(),
            server_key: config.server_key.clone(),
        }
    }
}

#[async_trait]
impl NotificationPublisher for FcmClient {
    async fn publish(&self, message: &PushMessage) -> Result<String> {
        let url = format!("{}/fcm/send", self.endpoint);
        let payload = json!({
            "to": format!("/topics/{}", message.topic),
            "priority": "high",
            "notification": {
                "title": message.title,
                "body": message.body,
            },
            "data": message.data,
            "android": {
                "priority": message.android.priority,
                "notification": {
                    "icon": message.android.icon,
                    "color": message.android.color,
                    "sound": message.android.sound,
                    "channel_id": message.android.channel_id,
                },
            },
            "apns": {
                "payload": {
                    "aps": {
                        "alert": {
                            "title": message.title,
                            "body": message.body,
                        },
                        "sound": message.apns.sound,
                        "badge": message.apns.badge,
                    },
                },
            },
        });

        tracing::debug!("Publishing to topic {} via {}", message.topic, url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("key={}", self.server_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Delivery(format!("FCM request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Delivery(format!(
                "FCM returned status {}: {}",
                status, body
            )));
        }

        let body: FcmSendResponse = response
            .json()
            .await
            .map_err(|e| AppError::Delivery(format!("Failed to parse FCM response: {}", e)))?;

        if let Some(error) = body.error {
            return Err(AppError::Delivery(format!("FCM rejected message: {}", error)));
        }

        let message_id = body
            .message_id
            .map(|id| match id {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .ok_or_else(|| AppError::Delivery("FCM response missing message_id".to_string()))?;

        tracing::info!(
            "Published notification to topic {} (message_id={})",
            message.topic,
            message_id
        );

        Ok(message_id)
    }
}
