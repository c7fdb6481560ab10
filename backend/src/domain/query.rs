//! Overpass QL construction for food and drink points of interest.

use std::fmt;

use super::geo::Coordinates;

/// Amenity kinds requested from Overpass.
pub const OVERPASS_AMENITIES: [&str; 5] = ["restaurant", "cafe", "fast_food", "bar", "pub"];

/// Server-side timeout directive used when none is configured.
pub const DEFAULT_QUERY_TIMEOUT_SECONDS: u32 = 25;

/// A rendered Overpass QL query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverpassQuery(String);

impl OverpassQuery {
    /// Query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverpassQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Element types queried for an amenity. Relations are only requested for
/// restaurants; cafés, bars and the rest are practically never mapped as
/// multipolygons.
fn element_types(amenity: &str) -> &'static [&'static str] {
    if amenity == "restaurant" {
        &["node", "way", "relation"]
    } else {
        &["node", "way"]
    }
}

/// Build an `around` query for food and drink amenities within `radius_km`
/// of `origin`.
///
/// The caller rejects non-positive radii before calling; this function only
/// renders text.
///
/// # Examples
/// ```
/// use dining_backend::domain::{Coordinates, build_query};
///
/// let query = build_query(Coordinates::new(45.4215, -75.6972), 5.0, 25);
/// assert!(query
///     .as_str()
///     .contains(r#"node["amenity"="cafe"](around:5000,45.4215,-75.6972);"#));
/// ```
pub fn build_query(origin: Coordinates, radius_km: f64, query_timeout_seconds: u32) -> OverpassQuery {
    let radius_meters = radius_km * 1000.0;
    let around = format!(
        "(around:{radius_meters},{lat},{lng})",
        lat = origin.latitude,
        lng = origin.longitude
    );

    let lines: Vec<String> = OVERPASS_AMENITIES
        .iter()
        .flat_map(|amenity| {
            let around = around.as_str();
            element_types(amenity)
                .iter()
                .map(move |element| format!("  {element}[\"amenity\"=\"{amenity}\"]{around};"))
        })
        .collect();

    OverpassQuery(format!(
        "[out:json][timeout:{timeout}];\n(\n{body}\n);\nout geom;",
        timeout = query_timeout_seconds.max(1),
        body = lines.join("\n")
    ))
}
