use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::config::ResolverConfig;
use crate::core::error::{AppError, Result};
use crate::features::districts::services::{
    DistrictResolver, NominatimClient, Provenance, ResolveInput, Resolution, ReverseGeocodeResponse,
    ReverseGeocoder,
};
use crate::shared::slug::slugify;

/// Time source seam so cache-expiry tests do not depend on the wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Cached reverse-geocode result with its resolution time.
struct CacheEntry {
    district: String,
    resolved_at: Instant,
}

/// Strategy B: Nominatim reverse geocoding with a TTL cache.
///
/// Accurate to real administrative boundaries without a hand-maintained
/// table, at the cost of network latency and an upstream availability
/// dependency. The cache amortizes repeated lookups from the same ~11m
/// grid cell. Concurrent misses for one cell may both call upstream; both
/// converge on the same cached value, so no single-flight collapsing is
/// done. The lock is never held across the network call.
pub struct NominatimResolver {
    geocoder: Arc<dyn ReverseGeocoder>,
    clock: Arc<dyn Clock>,
    cache: RwLock<HashMap<(i64, i64), CacheEntry>>,
    ttl: Duration,
    max_entries: usize,
    default_district: String,
}

impl NominatimResolver {
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            Arc::new(NominatimClient::new(
                config.nominatim_base_url.clone(),
                config.geocode_timeout,
            )),
            Arc::new(SystemClock),
            config.cache_ttl,
            config.cache_max_entries,
            config.default_district.clone(),
        )
    }

    pub fn new(
        geocoder: Arc<dyn ReverseGeocoder>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
        max_entries: usize,
        default_district: String,
    ) -> Self {
        Self {
            geocoder,
            clock,
            cache: RwLock::new(HashMap::new()),
            ttl,
            max_entries,
            default_district,
        }
    }

    /// Number of live cache entries. Test observability only.
    #[cfg(test)]
    pub async fn cache_len(&self) -> usize {
        self.cache.read().await.len()
    }

    /// Extract a district slug from a reverse-geocode response.
    ///
    /// Candidates in order: district/county-style field, then
    /// city/town/village-style, then state/region and country wrapped as
    /// `<name>_general`. The first candidate whose normalization yields a
    /// non-empty slug wins.
    fn extract_district(response: &ReverseGeocodeResponse) -> Option<String> {
        let address = response.address.as_ref()?;

        for candidate in [address.district_level(), address.city_level()]
            .into_iter()
            .flatten()
        {
            let slug = slugify(candidate);
            if !slug.is_empty() {
                return Some(slug);
            }
        }

        for candidate in [address.region_level(), address.country_level()]
            .into_iter()
            .flatten()
        {
            let slug = slugify(candidate);
            if !slug.is_empty() {
                return Some(format!("{}_general", slug));
            }
        }

        None
    }

    async fn cached(&self, key: (i64, i64)) -> Option<String> {
        let cache = self.cache.read().await;
        cache.get(&key).and_then(|entry| {
            let age = self.clock.now().saturating_duration_since(entry.resolved_at);
            (age < self.ttl).then(|| entry.district.clone())
        })
    }

    async fn insert(&self, key: (i64, i64), district: String) {
        let mut cache = self.cache.write().await;
        // Crude growth guard: wipe everything rather than track recency.
        if cache.len() > self.max_entries {
            tracing::warn!(
                "Geocode cache exceeded {} entries, clearing",
                self.max_entries
            );
            cache.clear();
        }
        cache.insert(
            key,
            CacheEntry {
                district,
                resolved_at: self.clock.now(),
            },
        );
    }
}

#[async_trait]
impl DistrictResolver for NominatimResolver {
    async fn resolve(&self, input: &ResolveInput) -> Result<Resolution> {
        let coordinate = input
            .coordinate
            .as_ref()
            .ok_or_else(|| AppError::MissingFields(vec!["location"]))?;

        let key = coordinate.grid_key();
        if let Some(district) = self.cached(key).await {
            tracing::debug!(
                "Resolved ({}, {}) -> {} [cache]",
                coordinate.latitude,
                coordinate.longitude,
                district
            );
            return Ok(Resolution::new(district, Provenance::Cache));
        }

        let response = match self.geocoder.reverse(coordinate).await {
            Ok(response) => response,
            Err(e) => {
                // Upstream trouble never propagates: degrade to the default
                // district and leave the cache untouched so the next caller
                // retries.
                tracing::warn!(
                    "Reverse geocode failed for ({}, {}): {}, using {}",
                    coordinate.latitude,
                    coordinate.longitude,
                    e,
                    self.default_district
                );
                return Ok(Resolution::new(
                    self.default_district.clone(),
                    Provenance::Error,
                ));
            }
        };

        match Self::extract_district(&response) {
            Some(district) => {
                self.insert(key, district.clone()).await;
                tracing::debug!(
                    "Resolved ({}, {}) -> {} [nominatim]",
                    coordinate.latitude,
                    coordinate.longitude,
                    district
                );
                Ok(Resolution::new(district, Provenance::Nominatim))
            }
            None => {
                tracing::warn!(
                    "Nominatim returned no usable address field for ({}, {}), using {}",
                    coordinate.latitude,
                    coordinate.longitude,
                    self.default_district
                );
                Ok(Resolution::new(
                    self.default_district.clone(),
                    Provenance::NominatimFallback,
                ))
            }
        }
    }
}
