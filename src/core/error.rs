use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required fields: {0:?}")]
    MissingFields(Vec<&'static str>),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingFields(ref fields) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Missing required fields",
                    "required": fields,
                }),
            ),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Invalid request",
                    "message": msg,
                }),
            ),
            AppError::BadRequest(ref msg) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Bad request",
                    "message": msg,
                }),
            ),
            AppError::ExternalService(ref msg) => {
                tracing::error!("External service error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "error": "Upstream service error",
                        "message": msg,
                        "timestamp": chrono::Utc::now().to_rfc3339(),
                    }),
                )
            }
            AppError::Delivery(ref msg) => {
                tracing::error!("Notification delivery failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to send SOS alert",
                        "message": msg,
                        "timestamp": chrono::Utc::now().to_rfc3339(),
                    }),
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Internal server error",
                        "message": msg,
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_maps_to_400() {
        let response = AppError::MissingFields(vec!["sos_id", "sos_type"]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn delivery_maps_to_500() {
        let response = AppError::Delivery("FCM returned status 503".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
