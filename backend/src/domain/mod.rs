//! Domain primitives, ports, and the discovery pipeline.
//!
//! Purpose: Turn raw mapping data into normalised, filtered restaurants
//! without depending on any transport. Adapters live in
//! [`crate::outbound`] and plug in through [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): discovery failure payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Restaurant (alias to `restaurant::Restaurant`): normalised record.
//! - RestaurantNormalizer: raw elements to restaurants.
//! - RestaurantDiscoveryService: fetch, normalise, filter.

pub mod cuisine_image;
pub mod discovery_service;
pub mod error;
pub mod filter;
pub mod geo;
pub mod normalization;
pub mod ports;
pub mod query;
pub mod restaurant;

pub use self::cuisine_image::cuisine_image;
pub use self::discovery_service::{DiscoveryConfig, RandomSource, RestaurantDiscoveryService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::filter::{RestaurantFilter, filter_restaurants};
pub use self::geo::{Coordinates, CoordinatesError, centroid, distance_km, round_to_tenth};
pub use self::normalization::{NormalizationTables, RestaurantNormalizer};
pub use self::query::{OverpassQuery, build_query};
pub use self::restaurant::{
    Address, Cuisine, DietaryTag, PriceTier, Restaurant, ScoreVector, UnknownCuisine,
    UnknownDietaryTag, UnknownPriceTier,
};

/// Convenient discovery result alias.
///
/// # Examples
/// ```
/// use dining_backend::domain::{DiscoveryResult, Error};
///
/// fn reject() -> DiscoveryResult<()> {
///     Err(Error::invalid_request("radiusMeters must be positive"))
/// }
/// assert!(reject().is_err());
/// ```
pub type DiscoveryResult<T> = Result<T, Error>;
