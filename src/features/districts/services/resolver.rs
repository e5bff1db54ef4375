use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::core::config::{ResolverConfig, ResolverStrategy};
use crate::core::error::Result;
use crate::features::districts::services::{
    ClientAssertedResolver, NominatimResolver, StaticBoundsResolver,
};
use crate::shared::constants::TOPIC_PREFIX;
use crate::shared::types::Coordinate;

/// How a district was obtained. Every resolution carries one of these so
/// callers and tests can tell a confident answer from a degraded default
/// without parsing log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Coordinate fell inside the simulator escape-hatch rectangle.
    Simulator,
    /// Matched a named district rectangle.
    Bounds,
    /// Matched a broad regional rectangle only.
    Region,
    /// Nothing matched; the configured default district was used.
    Fallback,
    /// Served from the reverse-geocode cache.
    Cache,
    /// Fresh Nominatim lookup.
    Nominatim,
    /// Nominatim answered but no address field survived normalization.
    NominatimFallback,
    /// Nominatim was unreachable or unparseable.
    Error,
    /// District asserted by the client.
    Client,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Simulator => "simulator",
            Provenance::Bounds => "bounds",
            Provenance::Region => "region",
            Provenance::Fallback => "fallback",
            Provenance::Cache => "cache",
            Provenance::Nominatim => "nominatim",
            Provenance::NominatimFallback => "nominatim-fallback",
            Provenance::Error => "error",
            Provenance::Client => "client",
        }
    }
}

/// A resolved district plus the provenance of the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub district: String,
    pub provenance: Provenance,
}

impl Resolution {
    pub fn new(district: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            district: district.into(),
            provenance,
        }
    }

    /// FCM topic for this district.
    pub fn topic(&self) -> String {
        format!("{}{}", TOPIC_PREFIX, self.district)
    }

    /// True when the resolver could not determine a precise answer and fell
    /// back to a default identifier.
    pub fn is_degraded(&self) -> bool {
        matches!(
            self.provenance,
            Provenance::Fallback | Provenance::NominatimFallback | Provenance::Error
        )
    }
}

/// Inputs a strategy may draw on. Which field is required depends on the
/// active strategy; the unused one is ignored.
#[derive(Debug, Clone, Default)]
pub struct ResolveInput {
    pub coordinate: Option<Coordinate>,
    pub asserted_district: Option<String>,
}

/// District resolution contract.
///
/// Resolution degradation is not an error: coordinate-based strategies
/// always produce some district. `Err` is reserved for request-shape
/// problems (missing coordinate, missing asserted district) that surface
/// as 400 to the caller.
#[async_trait]
pub trait DistrictResolver: Send + Sync {
    async fn resolve(&self, input: &ResolveInput) -> Result<Resolution>;

    /// Whether the strategy needs a coordinate in the request. Drives the
    /// required-fields list in request validation.
    fn requires_coordinate(&self) -> bool {
        true
    }
}

/// Build the resolver the configuration selects.
pub fn from_config(config: &ResolverConfig) -> Arc<dyn DistrictResolver> {
    match config.strategy {
        ResolverStrategy::Static => {
            Arc::new(StaticBoundsResolver::new(config.default_district.clone()))
        }
        ResolverStrategy::Nominatim => Arc::new(NominatimResolver::from_config(config)),
        ResolverStrategy::Client => Arc::new(ClientAssertedResolver),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_prefixes_district() {
        let resolution = Resolution::new("bengaluru_urban", Provenance::Bounds);
        assert_eq!(resolution.topic(), "district-bengaluru_urban");
    }

    #[test]
    fn degraded_provenances() {
        assert!(Resolution::new("x", Provenance::Error).is_degraded());
        assert!(Resolution::new("x", Provenance::Fallback).is_degraded());
        assert!(Resolution::new("x", Provenance::NominatimFallback).is_degraded());
        assert!(!Resolution::new("x", Provenance::Cache).is_degraded());
        assert!(!Resolution::new("x", Provenance::Bounds).is_degraded());
    }

    #[test]
    fn provenance_serializes_kebab_case() {
        let json = serde_json::to_string(&Provenance::NominatimFallback).unwrap();
        assert_eq!(json, "\"nominatim-fallback\"");
        assert_eq!(Provenance::NominatimFallback.as_str(), "nominatim-fallback");
    }
}
