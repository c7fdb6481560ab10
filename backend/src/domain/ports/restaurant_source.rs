//! Driven port for fetching raw points of interest from a mapping source.
//!
//! The domain owns the raw element shape so normalisation stays independent
//! of the Overpass wire format.

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::geo::Coordinates;
use crate::domain::query::OverpassQuery;

/// One tagged element as returned by the mapping source, before any
/// validation. Every field other than `element_type` may be missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawElement {
    /// OSM element type (`node`, `way`, or `relation`).
    pub element_type: String,
    /// Raw OSM element identifier.
    pub id: Option<i64>,
    /// Point latitude, for nodes.
    pub lat: Option<f64>,
    /// Point longitude, for nodes.
    pub lon: Option<f64>,
    /// Server-computed centre, when requested.
    pub center: Option<Coordinates>,
    /// Constituent points of a way or relation outline.
    pub geometry: Vec<Coordinates>,
    /// Raw OSM tags.
    pub tags: BTreeMap<String, String>,
}

impl RawElement {
    /// Tag value, if present.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

define_port_error! {
    /// Errors surfaced while calling the mapping source.
    pub enum RestaurantSourceError {
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "restaurant source transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "restaurant source timeout: {message}",
        /// The source rate-limited the request.
        RateLimited { message: String } =>
            "restaurant source rate limited request: {message}",
        /// The response could not be decoded.
        Decode { message: String } =>
            "restaurant source response decode failed: {message}",
        /// The source rejected the request.
        InvalidRequest { message: String } =>
            "restaurant source rejected request: {message}",
    }
}

impl RestaurantSourceError {
    /// Return whether retrying this error is expected to help.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

/// Port for querying points of interest around an origin.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantSource: Send + Sync {
    /// Run `query` and return every element in the response.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use dining_backend::domain::ports::{FixtureRestaurantSource, RestaurantSource};
    /// use dining_backend::domain::{Coordinates, build_query};
    ///
    /// let source = FixtureRestaurantSource::default();
    /// let query = build_query(Coordinates::new(45.4215, -75.6972), 5.0, 25);
    /// let elements = source.fetch_elements(&query).await?;
    /// assert!(elements.is_empty());
    /// # Ok::<(), dining_backend::domain::ports::RestaurantSourceError>(())
    /// ```
    async fn fetch_elements(
        &self,
        query: &OverpassQuery,
    ) -> Result<Vec<RawElement>, RestaurantSourceError>;
}

/// Fixture implementation returning a fixed element list for every query.
#[derive(Debug, Clone, Default)]
pub struct FixtureRestaurantSource {
    elements: Vec<RawElement>,
}

impl FixtureRestaurantSource {
    /// Build a fixture that always answers with `elements`.
    pub fn new(elements: Vec<RawElement>) -> Self {
        Self { elements }
    }
}

#[async_trait]
impl RestaurantSource for FixtureRestaurantSource {
    async fn fetch_elements(
        &self,
        _query: &OverpassQuery,
    ) -> Result<Vec<RawElement>, RestaurantSourceError> {
        Ok(self.elements.clone())
    }
}
