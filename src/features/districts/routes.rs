//! District lookup routes

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::districts::handlers;
use crate::features::districts::services::DistrictResolver;

/// Create routes for the districts feature
///
/// Only registered for the coordinate-resolving strategies; under the
/// client-asserted strategy the server has nothing to look up.
pub fn routes(resolver: Arc<dyn DistrictResolver>) -> Router {
    Router::new()
        .route("/get-district", post(handlers::get_district))
        .with_state(resolver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::districts::services::StaticBoundsResolver;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let resolver: Arc<dyn DistrictResolver> =
            Arc::new(StaticBoundsResolver::new("bengaluru_urban".to_string()));
        TestServer::new(routes(resolver)).unwrap()
    }

    #[tokio::test]
    async fn resolves_district_with_topic() {
        let response = server()
            .post("/get-district")
            .json(&json!({"latitude": 12.97, "longitude": 77.59}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["district"], "bengaluru_urban");
        assert_eq!(body["fcm_topic"], "district-bengaluru_urban");
        assert_eq!(body["provenance"], "bounds");
        assert_eq!(body["coordinates"]["latitude"], 12.97);
    }

    #[tokio::test]
    async fn missing_fields_yield_required_list() {
        let response = server().post("/get-district").json(&json!({})).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Missing required fields");
        assert_eq!(body["required"], json!(["latitude", "longitude"]));
    }

    #[tokio::test]
    async fn out_of_range_latitude_is_rejected() {
        let response = server()
            .post("/get-district")
            .json(&json!({"latitude": 93.5, "longitude": 77.59}))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid request");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("latitude must be between -90 and 90"));
    }

    #[tokio::test]
    async fn non_numeric_coordinate_is_rejected() {
        let response = server()
            .post("/get-district")
            .json(&json!({"latitude": "twelve", "longitude": 77.59}))
            .await;

        response.assert_status_bad_request();
    }
}
