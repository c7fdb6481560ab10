//! Driving port for restaurant discovery.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::geo::Coordinates;
use crate::domain::restaurant::{Cuisine, DietaryTag, Restaurant};

/// Discovery request supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryRequest {
    /// Reference point for every distance.
    pub origin: Coordinates,
    /// Search radius in metres.
    pub radius_meters: f64,
    /// Cuisines to keep; empty keeps all.
    pub cuisines: Vec<Cuisine>,
    /// Dietary tags of which at least one must match; empty keeps all.
    pub dietary: Vec<DietaryTag>,
}

impl DiscoveryRequest {
    /// Unfiltered request around `origin`.
    pub fn new(origin: Coordinates, radius_meters: f64) -> Self {
        Self {
            origin,
            radius_meters,
            cuisines: Vec::new(),
            dietary: Vec::new(),
        }
    }
}

/// Port for discovering restaurants around an origin.
#[async_trait]
pub trait RestaurantDiscovery: Send + Sync {
    /// Return filtered restaurants ordered by ascending distance.
    ///
    /// An empty list is a valid result and distinct from a failed fetch.
    async fn discover(&self, request: DiscoveryRequest) -> Result<Vec<Restaurant>, Error>;
}
