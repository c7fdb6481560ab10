//! Radius, cuisine, and dietary filtering over normalised restaurants.

use crate::domain::restaurant::{Cuisine, DietaryTag, Restaurant};

/// Criteria applied after normalisation.
///
/// Empty `cuisines` or `dietary` lists impose no constraint. A restaurant
/// passes the dietary check when it carries at least one wanted tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RestaurantFilter {
    /// Maximum distance in kilometres, compared at display precision.
    pub radius_km: f64,
    /// Accepted cuisines.
    pub cuisines: Vec<Cuisine>,
    /// Wanted dietary tags.
    pub dietary: Vec<DietaryTag>,
}

impl RestaurantFilter {
    /// Filter on radius alone.
    pub fn within(radius_km: f64) -> Self {
        Self {
            radius_km,
            ..Self::default()
        }
    }

    /// Whether `restaurant` satisfies every criterion.
    pub fn accepts(&self, restaurant: &Restaurant) -> bool {
        restaurant.rounded_distance_km() <= self.radius_km
            && (self.cuisines.is_empty() || self.cuisines.contains(&restaurant.cuisine))
            && (self.dietary.is_empty() || restaurant.has_any_tag(&self.dietary))
    }
}

/// Copy the restaurants accepted by `filter` into a new list, preserving
/// order. The input is left untouched.
///
/// Applying the same filter twice yields the same list.
pub fn filter_restaurants(restaurants: &[Restaurant], filter: &RestaurantFilter) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|restaurant| filter.accepts(restaurant))
        .cloned()
        .collect()
}
