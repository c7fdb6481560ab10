//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod restaurant_discovery;
mod restaurant_source;

pub use restaurant_discovery::{DiscoveryRequest, RestaurantDiscovery};
#[cfg(test)]
pub use restaurant_source::MockRestaurantSource;
pub use restaurant_source::{
    FixtureRestaurantSource, RawElement, RestaurantSource, RestaurantSourceError,
};
