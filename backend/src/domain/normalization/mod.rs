//! Normalisation of raw points of interest into [`Restaurant`] records.
//!
//! Records without a usable name or without derivable coordinates are
//! skipped silently; every other missing attribute is inferred or
//! synthesised. The output is ordered by ascending distance from the origin,
//! at display precision, keeping input order for ties.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use crate::domain::cuisine_image::cuisine_image;
use crate::domain::geo::{Coordinates, centroid, distance_km};
use crate::domain::ports::RawElement;
use crate::domain::restaurant::{Address, Cuisine, DietaryTag, Restaurant};

mod synthesis;
mod tables;

pub use tables::{
    CUISINE_KEYWORDS, DIET_KEYS, DietaryHeuristics, NormalizationTables, PlaceholderAddress,
};

/// Address tags in assembly order. Each slot takes the first present key.
const ADDRESS_SLOTS: [&[&str]; 4] = [
    &["addr:housenumber"],
    &["addr:street"],
    &["addr:city", "addr:town"],
    &["addr:province", "addr:state"],
];

/// Converts raw elements into restaurants using immutable lookup tables.
#[derive(Debug, Clone, Default)]
pub struct RestaurantNormalizer {
    tables: NormalizationTables,
}

impl RestaurantNormalizer {
    /// Build a normaliser over `tables`.
    pub fn new(tables: NormalizationTables) -> Self {
        Self { tables }
    }

    /// Normalise `elements` relative to `origin`.
    ///
    /// `rng` supplies every synthetic value and `now` stamps the score
    /// vectors, so a seeded generator and a fixed timestamp make the output
    /// fully reproducible. When two elements map to the same id the first is
    /// kept.
    pub fn normalize<R: Rng + ?Sized>(
        &self,
        elements: &[RawElement],
        origin: Coordinates,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Vec<Restaurant> {
        let mut seen = HashSet::with_capacity(elements.len());
        let mut restaurants = Vec::with_capacity(elements.len());

        for (index, element) in elements.iter().enumerate() {
            let id = element_id(index, element);
            if seen.contains(&id) {
                debug!(id = %id, "skipping duplicate element");
                continue;
            }
            let Some(restaurant) = self.normalize_element(id, element, origin, rng, now) else {
                continue;
            };
            seen.insert(restaurant.id.clone());
            restaurants.push(restaurant);
        }

        restaurants.sort_by(|left, right| {
            left.rounded_distance_km()
                .total_cmp(&right.rounded_distance_km())
        });
        restaurants
    }

    fn normalize_element<R: Rng + ?Sized>(
        &self,
        id: String,
        element: &RawElement,
        origin: Coordinates,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Option<Restaurant> {
        let Some(name) = extract_name(element) else {
            debug!(id = %id, "skipping element without a usable name");
            return None;
        };
        let Some(coordinates) = extract_coordinates(element) else {
            debug!(id = %id, "skipping element without derivable coordinates");
            return None;
        };

        let distance = distance_km(origin, coordinates);
        let cuisine = self.tables.resolve_cuisine(element.tag("cuisine"), &name);
        let address = assemble_address(element).unwrap_or_else(|| {
            let placeholder = format!(
                "{} {}, {}",
                synthesis::house_number(rng),
                self.tables.placeholder.street,
                self.tables.placeholder.locality
            );
            debug!(id = %id, address = %placeholder, "using placeholder address");
            Address::Placeholder(placeholder)
        });
        let rating = synthesis::rating(rng);
        let reviews = synthesis::reviews(rng);
        let price = synthesis::price(rng);
        let tags = self.dietary_tags(element, cuisine, rng);
        let travel_minutes = synthesis::travel_minutes(distance, rng);
        let scores = synthesis::scores(rating, reviews, now, rng);

        Some(Restaurant {
            image: cuisine_image(cuisine, &name).to_owned(),
            id,
            name,
            cuisine,
            rating,
            reviews,
            price,
            distance_km: distance,
            travel_minutes,
            tags,
            address,
            phone: non_blank_tag(element, "phone"),
            website: non_blank_tag(element, "website"),
            coordinates,
            scores,
        })
    }

    /// Heuristic tags first (cafés, then cuisine odds), then explicit
    /// `diet:*` tags. Duplicates are kept.
    fn dietary_tags<R: Rng + ?Sized>(
        &self,
        element: &RawElement,
        cuisine: Cuisine,
        rng: &mut R,
    ) -> Vec<DietaryTag> {
        let mut tags = Vec::new();
        if self.tables.heuristics.cafes_are_vegetarian && element.tag("amenity") == Some("cafe") {
            tags.push(DietaryTag::Vegetarian);
        }
        if let Some(odds) = self.tables.vegetarian_odds(cuisine) {
            if rng.gen_bool(odds.clamp(0.0, 1.0)) {
                tags.push(DietaryTag::Vegetarian);
            }
        }
        tags.extend(self.tables.explicit_diets(|key| element.tag(key)));
        tags
    }
}

fn element_id(index: usize, element: &RawElement) -> String {
    match element.id {
        Some(id) => format!("osm-{}-{id}", element.element_type),
        None => format!("osm-{index}"),
    }
}

fn non_blank_tag(element: &RawElement, key: &str) -> Option<String> {
    element
        .tag(key)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

fn extract_name(element: &RawElement) -> Option<String> {
    non_blank_tag(element, "name").or_else(|| non_blank_tag(element, "name:en"))
}

/// Point coordinates, then the server-computed centre, then the centroid of
/// the outline. The first valid candidate wins.
fn extract_coordinates(element: &RawElement) -> Option<Coordinates> {
    let point = element
        .lat
        .zip(element.lon)
        .map(|(latitude, longitude)| Coordinates::new(latitude, longitude));
    point
        .into_iter()
        .chain(element.center)
        .chain(centroid(&element.geometry))
        .find(Coordinates::is_valid)
}

fn assemble_address(element: &RawElement) -> Option<Address> {
    let parts: Vec<String> = ADDRESS_SLOTS
        .iter()
        .filter_map(|keys| keys.iter().find_map(|key| non_blank_tag(element, key)))
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(Address::Recorded(parts.join(" ")))
}
