use async_trait::async_trait;
use serde::Deserialize;

use crate::core::error::{AppError, Result};
use crate::shared::types::Coordinate;

/// Nominatim reverse-geocode response structure
#[derive(Debug, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    pub display_name: Option<String>,
    pub address: Option<ReverseGeocodeAddress>,
}

/// Nominatim address components, district level and up
#[derive(Debug, Default, Deserialize)]
pub struct ReverseGeocodeAddress {
    pub district: Option<String>,
    pub state_district: Option<String>,
    pub county: Option<String>,
    pub city_district: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub municipality: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl ReverseGeocodeAddress {
    /// Most specific district/county-style field present.
    pub fn district_level(&self) -> Option<&str> {
        self.district
            .as_deref()
            .or(self.state_district.as_deref())
            .or(self.county.as_deref())
            .or(self.city_district.as_deref())
    }

    /// City, falling back to town, village or municipality.
    pub fn city_level(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
            .or(self.municipality.as_deref())
    }

    pub fn region_level(&self) -> Option<&str> {
        self.state.as_deref().or(self.region.as_deref())
    }

    pub fn country_level(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

/// Reverse geocoding seam. Production uses [`NominatimClient`]; tests
/// script responses without touching the network.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, coordinate: &Coordinate) -> Result<ReverseGeocodeResponse>;
}

/// Service for reverse geocoding coordinates using Nominatim
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("SurakshaCore/0.1 (sos-alert-relay)")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, coordinate: &Coordinate) -> Result<ReverseGeocodeResponse> {
        let url = format!(
            "{}/reverse?format=jsonv2&lat={}&lon={}&zoom=10&addressdetails=1",
            self.base_url, coordinate.latitude, coordinate.longitude
        );

        tracing::debug!(
            "Reverse geocoding ({}, {}) -> {}",
            coordinate.latitude,
            coordinate.longitude,
            url
        );

        let response = self
            .client
            .get(&url)
            .header("Accept-Language", "en")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Nominatim request failed: {:?}", e);
                AppError::ExternalService(format!("Nominatim request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Nominatim returned status: {}", status);
            return Err(AppError::ExternalService(format!(
                "Nominatim returned status: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Nominatim response: {:?}", e);
            AppError::ExternalService(format!("Failed to parse Nominatim response: {}", e))
        })
    }
}
