#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use crate::core::error::{AppError, Result};
#[cfg(test)]
use crate::features::notifications::models::PushMessage;
#[cfg(test)]
use crate::features::notifications::services::NotificationPublisher;

/// Publisher stub that records every message instead of talking to FCM.
/// Construct with [`RecordingPublisher::failing`] to script a delivery
/// failure.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingPublisher {
    pub sent: tokio::sync::Mutex<Vec<PushMessage>>,
    fail_with: Option<String>,
}

#[cfg(test)]
impl RecordingPublisher {
    pub fn failing(message: &str) -> Self {
        Self {
            sent: tokio::sync::Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl NotificationPublisher for RecordingPublisher {
    async fn publish(&self, message: &PushMessage) -> Result<String> {
        if let Some(ref reason) = self.fail_with {
            return Err(AppError::Delivery(reason.clone()));
        }
        let mut sent = self.sent.lock().await;
        sent.push(message.clone());
        Ok(format!("projects/suraksha-test/messages/{}", sent.len()))
    }
}
