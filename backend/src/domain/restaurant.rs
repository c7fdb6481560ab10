//! Normalised restaurant records produced by discovery.
//!
//! Distances and travel times are stored as numbers; the `"2.1 km"` and
//! `"15 min"` strings are derived on demand for presentation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo::{Coordinates, round_to_tenth};

macro_rules! labelled_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident ($error:ident: $what:literal) {
            $( $(#[$variant_meta:meta])* $variant:ident => $label:literal ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$variant_meta])* #[serde(rename = $label)] $variant, )*
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Display label.
            pub const fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        #[doc = concat!("Error returned when a string is not a known ", $what, " label.")]
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        #[error("unknown {}: {value}", $what)]
        pub struct $error {
            /// The rejected input.
            pub value: String,
        }

        impl FromStr for $name {
            type Err = $error;

            /// Labels match case-sensitively.
            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.label() == value)
                    .ok_or_else(|| $error {
                        value: value.to_owned(),
                    })
            }
        }
    };
}

labelled_enum! {
    /// Fixed cuisine vocabulary.
    pub enum Cuisine (UnknownCuisine: "cuisine") {
        /// Italian.
        Italian => "Italian",
        /// Chinese.
        Chinese => "Chinese",
        /// Japanese.
        Japanese => "Japanese",
        /// Indian.
        Indian => "Indian",
        /// Mexican.
        Mexican => "Mexican",
        /// Thai.
        Thai => "Thai",
        /// Mediterranean.
        Mediterranean => "Mediterranean",
        /// American.
        American => "American",
        /// French.
        French => "French",
        /// Korean.
        Korean => "Korean",
        /// Vietnamese.
        Vietnamese => "Vietnamese",
        /// Greek.
        Greek => "Greek",
        /// Turkish.
        Turkish => "Turkish",
        /// Lebanese.
        Lebanese => "Lebanese",
        /// Seafood.
        Seafood => "Seafood",
        /// Regional.
        Regional => "Regional",
        /// Fallback when nothing more specific is known.
        International => "International",
    }
}

labelled_enum! {
    /// Dietary attributes attached to a restaurant.
    pub enum DietaryTag (UnknownDietaryTag: "dietary tag") {
        /// Vegetarian-friendly.
        Vegetarian => "Vegetarian",
        /// Vegan options.
        Vegan => "Vegan",
        /// Halal.
        Halal => "Halal",
        /// Kosher.
        Kosher => "Kosher",
        /// Gluten-free options.
        GlutenFree => "Gluten-Free",
    }
}

labelled_enum! {
    /// Four-tier price scale.
    pub enum PriceTier (UnknownPriceTier: "price tier") {
        /// Inexpensive.
        Budget => "$",
        /// Moderate.
        Moderate => "$$",
        /// Expensive.
        Upscale => "$$$",
        /// Very expensive.
        Luxury => "$$$$",
    }
}

/// Street address, tagged with whether it came from the source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum Address {
    /// Assembled from the record's address tags.
    Recorded(String),
    /// Synthetic stand-in used when the record has no address tags.
    Placeholder(String),
}

impl Address {
    /// Address text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Recorded(text) | Self::Placeholder(text) => text,
        }
    }

    /// Whether the address was fabricated.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nine-dimension score vector on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreVector {
    /// Individual user's score.
    pub user_score: u8,
    /// Combined group score.
    pub group_score: u8,
    /// Public rating.
    pub overall_rating: u8,
    /// Recency of positive signals.
    pub freshness: u8,
    /// Hygiene.
    pub hygiene: u8,
    /// Derived from review volume.
    pub popularity: u8,
    /// Price versus quality.
    pub value: u8,
    /// Service quality.
    pub service: u8,
    /// Atmosphere.
    pub ambiance: u8,
    /// When the vector was generated.
    pub last_updated: DateTime<Utc>,
}

/// A normalised restaurant.
///
/// ## Invariants
/// - `name` is non-empty.
/// - `coordinates` are finite and within WGS84 ranges.
/// - `distance_km` is measured from the origin of the discovery call that
///   produced the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Identifier derived from the source element, unique per result set.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Resolved cuisine.
    pub cuisine: Cuisine,
    /// Rating in `[3.0, 5.0]`.
    pub rating: f64,
    /// Review count.
    pub reviews: u32,
    /// Price tier.
    pub price: PriceTier,
    /// Representative photo URL.
    pub image: String,
    /// Great-circle distance from the origin in kilometres.
    pub distance_km: f64,
    /// Estimated travel time in minutes.
    pub travel_minutes: u32,
    /// Dietary tags in detection order. Duplicates are kept.
    pub tags: Vec<DietaryTag>,
    /// Street address.
    pub address: Address,
    /// Phone number, when tagged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Website, when tagged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Location.
    pub coordinates: Coordinates,
    /// Score vector.
    pub scores: ScoreVector,
}

impl Restaurant {
    /// Distance at display precision; the value used for ordering and
    /// radius filtering.
    pub fn rounded_distance_km(&self) -> f64 {
        round_to_tenth(self.distance_km)
    }

    /// Distance formatted as `"<x.x> km"`.
    ///
    /// # Examples
    /// ```rust,ignore
    /// assert_eq!(restaurant.distance_label(), "2.1 km");
    /// ```
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.rounded_distance_km())
    }

    /// Travel time formatted as `"<n> min"`.
    pub fn time_label(&self) -> String {
        format!("{} min", self.travel_minutes)
    }

    /// Whether any of `wanted` appears among this restaurant's tags.
    pub fn has_any_tag(&self, wanted: &[DietaryTag]) -> bool {
        wanted.iter().any(|tag| self.tags.contains(tag))
    }
}
