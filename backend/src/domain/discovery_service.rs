//! Restaurant discovery orchestration.
//!
//! One call validates the request, runs a single bounded-area query against
//! the restaurant source, normalises the response, and filters it. A fetch
//! failure fails the whole call; no partial results are returned.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::Clock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::domain::Error;
use crate::domain::filter::{RestaurantFilter, filter_restaurants};
use crate::domain::normalization::RestaurantNormalizer;
use crate::domain::ports::{
    DiscoveryRequest, RawElement, RestaurantDiscovery, RestaurantSource, RestaurantSourceError,
};
use crate::domain::query::{DEFAULT_QUERY_TIMEOUT_SECONDS, OverpassQuery, build_query};
use crate::domain::restaurant::Restaurant;

const METERS_PER_KM: f64 = 1000.0;

/// Tunables for discovery calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Server-side timeout embedded in the query.
    pub query_timeout_seconds: u32,
    /// Maximum fetch attempts per call, including the first.
    pub max_fetch_attempts: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub retry_backoff: Duration,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            query_timeout_seconds: DEFAULT_QUERY_TIMEOUT_SECONDS,
            max_fetch_attempts: 1,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

/// Source of randomness for synthesised fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSource {
    /// Fresh operating-system entropy on every call.
    #[default]
    Entropy,
    /// Fixed seed; every call with the same payload yields the same output.
    Seeded(u64),
}

impl RandomSource {
    fn rng(self) -> StdRng {
        match self {
            Self::Entropy => StdRng::from_entropy(),
            Self::Seeded(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Domain service implementing [`RestaurantDiscovery`] over a
/// [`RestaurantSource`].
#[derive(Clone)]
pub struct RestaurantDiscoveryService<S> {
    source: Arc<S>,
    normalizer: RestaurantNormalizer,
    clock: Arc<dyn Clock>,
    random: RandomSource,
    config: DiscoveryConfig,
}

impl<S> RestaurantDiscoveryService<S> {
    /// Create a service with default tables, entropy-backed randomness, and
    /// default configuration.
    pub fn new(source: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            normalizer: RestaurantNormalizer::default(),
            clock,
            random: RandomSource::Entropy,
            config: DiscoveryConfig::default(),
        }
    }

    /// Replace the normaliser, e.g. one built over tuned tables.
    pub fn with_normalizer(mut self, normalizer: RestaurantNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replace the random source.
    pub fn with_random_source(mut self, random: RandomSource) -> Self {
        self.random = random;
        self
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: DiscoveryConfig) -> Self {
        self.config = config;
        self
    }

    fn retry_delay(&self, attempt: u32) -> Duration {
        let exponent = 2_u32.saturating_pow(attempt.saturating_sub(1));
        self.config.retry_backoff.saturating_mul(exponent)
    }
}

impl<S> RestaurantDiscoveryService<S>
where
    S: RestaurantSource,
{
    async fn fetch_with_retry(&self, query: &OverpassQuery) -> Result<Vec<RawElement>, Error> {
        let max_attempts = self.config.max_fetch_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.source.fetch_elements(query).await {
                Ok(elements) => return Ok(elements),
                Err(error) if error.is_retryable() && attempt < max_attempts => {
                    let delay = self.retry_delay(attempt);
                    warn!(
                        attempt,
                        max_attempts,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %error,
                        "restaurant fetch failed; retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(map_source_error(error)),
            }
        }
    }
}

#[async_trait]
impl<S> RestaurantDiscovery for RestaurantDiscoveryService<S>
where
    S: RestaurantSource,
{
    async fn discover(&self, request: DiscoveryRequest) -> Result<Vec<Restaurant>, Error> {
        validate_request(&request)?;
        let radius_km = request.radius_meters / METERS_PER_KM;
        let query = build_query(request.origin, radius_km, self.config.query_timeout_seconds);

        let elements = self.fetch_with_retry(&query).await?;
        let raw_count = elements.len();

        let mut rng = self.random.rng();
        let normalized =
            self.normalizer
                .normalize(&elements, request.origin, &mut rng, self.clock.utc());
        let filter = RestaurantFilter {
            radius_km,
            cuisines: request.cuisines,
            dietary: request.dietary,
        };
        let restaurants = filter_restaurants(&normalized, &filter);

        info!(
            raw_count,
            normalized_count = normalized.len(),
            result_count = restaurants.len(),
            radius_km,
            "restaurant discovery completed"
        );
        Ok(restaurants)
    }
}

fn validate_request(request: &DiscoveryRequest) -> Result<(), Error> {
    if !request.origin.is_valid() {
        return Err(Error::invalid_request(
            "origin must be finite with latitude within [-90, 90] and longitude within [-180, 180]",
        ));
    }
    if !(request.radius_meters.is_finite() && request.radius_meters > 0.0) {
        return Err(Error::invalid_request(
            "radiusMeters must be a positive finite number",
        ));
    }
    Ok(())
}

fn map_source_error(error: RestaurantSourceError) -> Error {
    match error {
        RestaurantSourceError::Timeout { message } => {
            Error::gateway_timeout(format!("restaurant source timed out: {message}"))
        }
        RestaurantSourceError::InvalidRequest { message } => {
            Error::invalid_request(format!("restaurant source rejected query: {message}"))
        }
        other @ (RestaurantSourceError::Transport { .. }
        | RestaurantSourceError::RateLimited { .. }
        | RestaurantSourceError::Decode { .. }) => {
            Error::service_unavailable(format!("restaurant source unavailable: {other}"))
        }
    }
}

#[cfg(test)]
#[path = "discovery_service_tests.rs"]
mod tests;
