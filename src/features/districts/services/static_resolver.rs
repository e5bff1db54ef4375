use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::features::districts::models::{DISTRICT_BOUNDS, REGIONAL_BOUNDS, SIMULATOR_BOUND};
use crate::features::districts::services::{DistrictResolver, Provenance, ResolveInput, Resolution};

/// Strategy A: ordered scan of hand-maintained bounding boxes.
///
/// Zero network dependency and deterministic, at the cost of geographic
/// coarseness. The simulator rectangle is checked first, then the district
/// table, then the regional fallbacks, then the configured default.
pub struct StaticBoundsResolver {
    default_district: String,
}

impl StaticBoundsResolver {
    pub fn new(default_district: String) -> Self {
        Self { default_district }
    }
}

#[async_trait]
impl DistrictResolver for StaticBoundsResolver {
    async fn resolve(&self, input: &ResolveInput) -> Result<Resolution> {
        let coordinate = input
            .coordinate
            .as_ref()
            .ok_or_else(|| AppError::MissingFields(vec!["location"]))?;

        if SIMULATOR_BOUND.contains(coordinate) {
            return Ok(Resolution::new(SIMULATOR_BOUND.id, Provenance::Simulator));
        }

        if let Some(bound) = DISTRICT_BOUNDS.iter().find(|b| b.contains(coordinate)) {
            tracing::debug!(
                "Resolved ({}, {}) -> {} [bounds]",
                coordinate.latitude,
                coordinate.longitude,
                bound.id
            );
            return Ok(Resolution::new(bound.id, Provenance::Bounds));
        }

        if let Some(bound) = REGIONAL_BOUNDS.iter().find(|b| b.contains(coordinate)) {
            tracing::debug!(
                "Resolved ({}, {}) -> {} [region]",
                coordinate.latitude,
                coordinate.longitude,
                bound.id
            );
            return Ok(Resolution::new(bound.id, Provenance::Region));
        }

        tracing::warn!(
            "No bound contains ({}, {}), falling back to {}",
            coordinate.latitude,
            coordinate.longitude,
            self.default_district
        );
        Ok(Resolution::new(
            self.default_district.clone(),
            Provenance::Fallback,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::Coordinate;

    fn resolver() -> StaticBoundsResolver {
        StaticBoundsResolver::new("bengaluru_urban".to_string())
    }

    fn input(latitude: f64, longitude: f64) -> ResolveInput {
        ResolveInput {
            coordinate: Some(Coordinate::new(latitude, longitude)),
            asserted_district: None,
        }
    }

    #[tokio::test]
    async fn resolves_coordinates_inside_a_district_bound() {
        let resolution = resolver().resolve(&input(12.97, 77.59)).await.unwrap();
        assert_eq!(resolution.district, "bengaluru_urban");
        assert_eq!(resolution.provenance, Provenance::Bounds);

        let resolution = resolver().resolve(&input(12.30, 76.65)).await.unwrap();
        assert_eq!(resolution.district, "mysuru");
    }

    #[tokio::test]
    async fn earlier_entries_win_in_overlap() {
        // (12.90, 77.35) lies in both bengaluru_urban and ramanagara;
        // bengaluru_urban is declared first so it must win.
        let resolution = resolver().resolve(&input(12.90, 77.35)).await.unwrap();
        assert_eq!(resolution.district, "bengaluru_urban");
    }

    #[tokio::test]
    async fn specific_district_wins_over_region() {
        // Inside mysuru, also inside south_karnataka_general.
        let resolution = resolver().resolve(&input(12.30, 76.65)).await.unwrap();
        assert_eq!(resolution.district, "mysuru");
        assert_eq!(resolution.provenance, Provenance::Bounds);
    }

    #[tokio::test]
    async fn regional_fallback_when_no_district_matches() {
        // Chennai: inside south_india_general, outside every district box.
        let resolution = resolver().resolve(&input(13.08, 80.27)).await.unwrap();
        assert_eq!(resolution.district, "south_india_general");
        assert_eq!(resolution.provenance, Provenance::Region);
    }

    #[tokio::test]
    async fn ultimate_fallback_when_nothing_matches() {
        // London.
        let resolution = resolver().resolve(&input(51.50, -0.12)).await.unwrap();
        assert_eq!(resolution.district, "bengaluru_urban");
        assert_eq!(resolution.provenance, Provenance::Fallback);
        assert!(resolution.is_degraded());
    }

    #[tokio::test]
    async fn simulator_rectangle_overrides_geography() {
        let resolution = resolver().resolve(&input(37.75, -122.42)).await.unwrap();
        assert_eq!(resolution.district, "simulator_test");
        assert_eq!(resolution.provenance, Provenance::Simulator);
    }

    #[tokio::test]
    async fn missing_coordinate_is_a_request_error() {
        let result = resolver().resolve(&ResolveInput::default()).await;
        assert!(matches!(result, Err(AppError::MissingFields(_))));
    }
}
