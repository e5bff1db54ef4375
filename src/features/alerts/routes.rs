//! SOS alert routes

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::alerts::handlers;
use crate::features::alerts::services::AlertService;

/// Create routes for the alerts feature
///
/// `/api/sos` is kept as an alias for clients still on the earlier path.
pub fn routes(service: Arc<AlertService>) -> Router {
    Router::new()
        .route("/sos", post(handlers::send_sos))
        .route("/api/sos", post(handlers::send_sos))
        .route("/test-sos", post(handlers::test_sos))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::districts::services::{
        ClientAssertedResolver, DistrictResolver, StaticBoundsResolver,
    };
    use crate::shared::test_helpers::RecordingPublisher;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server_with(
        resolver: Arc<dyn DistrictResolver>,
        publisher: Arc<RecordingPublisher>,
    ) -> TestServer {
        let service = Arc::new(AlertService::new(resolver, publisher));
        TestServer::new(routes(service)).unwrap()
    }

    fn static_server(publisher: Arc<RecordingPublisher>) -> TestServer {
        server_with(
            Arc::new(StaticBoundsResolver::new("bengaluru_urban".to_string())),
            publisher,
        )
    }

    #[tokio::test]
    async fn sos_alert_end_to_end() {
        let publisher = Arc::new(RecordingPublisher::default());
        let server = static_server(Arc::clone(&publisher));

        let response = server
            .post("/sos")
            .json(&json!({
                "sos_id": "abc",
                "sos_type": "sos_alert",
                "location": {"latitude": 12.97, "longitude": 77.59}
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["district"], "bengaluru_urban");
        assert_eq!(body["topic"], "district-bengaluru_urban");
        assert_eq!(body["sosId"], "abc");
        assert!(body["messageId"].as_str().is_some());

        let sent = publisher.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].data["type"], "sos_alert");
    }

    #[tokio::test]
    async fn api_sos_alias_reaches_the_same_pipeline() {
        let publisher = Arc::new(RecordingPublisher::default());
        let server = static_server(Arc::clone(&publisher));

        let response = server
            .post("/api/sos")
            .json(&json!({
                "sos_id": "abc",
                "sos_type": "stop",
                "location": {"latitude": 12.97, "longitude": 77.59}
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(publisher.sent.lock().await[0].data["type"], "sos_resolved");
    }

    #[tokio::test]
    async fn missing_sos_id_lists_required_fields() {
        let publisher = Arc::new(RecordingPublisher::default());
        let server = static_server(publisher);

        let response = server
            .post("/sos")
            .json(&json!({
                "sos_type": "sos_alert",
                "location": {"latitude": 12.97, "longitude": 77.59}
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Missing required fields");
        assert_eq!(body["required"], json!(["sos_id"]));
    }

    #[tokio::test]
    async fn invalid_sos_type_is_rejected() {
        let publisher = Arc::new(RecordingPublisher::default());
        let server = static_server(publisher);

        let response = server
            .post("/sos")
            .json(&json!({
                "sos_id": "abc",
                "sos_type": "foo",
                "location": {"latitude": 12.97, "longitude": 77.59}
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("Invalid sos_type 'foo'"));
    }

    #[tokio::test]
    async fn client_strategy_requires_asserted_district() {
        let publisher = Arc::new(RecordingPublisher::default());
        let server = server_with(Arc::new(ClientAssertedResolver), publisher);

        let response = server
            .post("/sos")
            .json(&json!({
                "sos_id": "abc",
                "sos_type": "stop",
                "userInfo": {"name": "Asha"}
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["required"], json!(["userInfo.district"]));
    }

    #[tokio::test]
    async fn client_strategy_accepts_asserted_district() {
        let publisher = Arc::new(RecordingPublisher::default());
        let server = server_with(Arc::new(ClientAssertedResolver), Arc::clone(&publisher));

        let response = server
            .post("/sos")
            .json(&json!({
                "sos_id": "abc",
                "sos_type": "stop",
                "userInfo": {"district": "Bengaluru Urban"}
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["district"], "bengaluru_urban");
        assert_eq!(body["topic"], "district-bengaluru_urban");
    }

    #[tokio::test]
    async fn delivery_failure_surfaces_as_500() {
        let publisher = Arc::new(RecordingPublisher::failing("FCM returned status 503"));
        let server = static_server(publisher);

        let response = server
            .post("/sos")
            .json(&json!({
                "sos_id": "abc",
                "sos_type": "sos_alert",
                "location": {"latitude": 12.97, "longitude": 77.59}
            }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "Failed to send SOS alert");
        assert!(body["message"].as_str().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_sos_dispatches_canned_alert() {
        let publisher = Arc::new(RecordingPublisher::default());
        let server = static_server(Arc::clone(&publisher));

        let response = server.post("/test-sos").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["sosId"].as_str().unwrap().starts_with("test-"));
        assert_eq!(publisher.sent.lock().await.len(), 1);
    }
}
