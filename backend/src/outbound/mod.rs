//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **overpass**: reqwest-backed [`crate::domain::ports::RestaurantSource`]
//!   talking to an Overpass API endpoint.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod overpass;
