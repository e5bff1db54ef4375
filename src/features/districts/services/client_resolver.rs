use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::features::districts::services::{DistrictResolver, Provenance, ResolveInput, Resolution};
use crate::shared::slug::slugify;

/// Strategy C: trust the district the client asserts.
///
/// No server-side computation; the device (with its own platform geocoding)
/// names the district and the server only normalizes it. A missing district
/// is a client error, not something resolved locally. There is no allow-list
/// check against known districts — a documented gap of this strategy.
pub struct ClientAssertedResolver;

#[async_trait]
impl DistrictResolver for ClientAssertedResolver {
    async fn resolve(&self, input: &ResolveInput) -> Result<Resolution> {
        let asserted = input
            .asserted_district
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::MissingFields(vec!["userInfo.district"]))?;

        let district = slugify(asserted);
        if district.is_empty() {
            return Err(AppError::Validation(format!(
                "userInfo.district '{}' contains no usable characters",
                asserted
            )));
        }

        Ok(Resolution::new(district, Provenance::Client))
    }

    fn requires_coordinate(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(district: Option<&str>) -> ResolveInput {
        ResolveInput {
            coordinate: None,
            asserted_district: district.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn accepts_and_normalizes_asserted_district() {
        let resolution = ClientAssertedResolver
            .resolve(&input(Some("Bengaluru Urban")))
            .await
            .unwrap();
        assert_eq!(resolution.district, "bengaluru_urban");
        assert_eq!(resolution.provenance, Provenance::Client);
    }

    #[tokio::test]
    async fn missing_district_is_a_request_error() {
        let result = ClientAssertedResolver.resolve(&input(None)).await;
        assert!(matches!(result, Err(AppError::MissingFields(ref f)) if f == &vec!["userInfo.district"]));

        let result = ClientAssertedResolver.resolve(&input(Some("   "))).await;
        assert!(matches!(result, Err(AppError::MissingFields(_))));
    }

    #[tokio::test]
    async fn unusable_district_is_rejected() {
        let result = ClientAssertedResolver.resolve(&input(Some("???"))).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
