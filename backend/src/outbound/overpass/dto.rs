//! DTOs for decoding Overpass JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! records (`RawElement`) in one pass. Nothing is dropped here; the
//! normaliser decides which elements are usable.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::Coordinates;
use crate::domain::ports::RawElement;

#[derive(Debug, Deserialize)]
pub(super) struct OverpassResponseDto {
    #[serde(default)]
    pub(super) elements: Vec<OverpassElementDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OverpassElementDto {
    #[serde(rename = "type")]
    pub(super) element_type: String,
    #[serde(default)]
    pub(super) id: Option<i64>,
    #[serde(default)]
    pub(super) lat: Option<f64>,
    #[serde(default)]
    pub(super) lon: Option<f64>,
    #[serde(default)]
    pub(super) center: Option<OverpassPointDto>,
    /// `out geom` emits `null` for member nodes outside the query area.
    #[serde(default)]
    pub(super) geometry: Vec<Option<OverpassPointDto>>,
    #[serde(default)]
    pub(super) members: Vec<OverpassMemberDto>,
    #[serde(default)]
    pub(super) tags: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OverpassMemberDto {
    #[serde(default)]
    pub(super) geometry: Vec<Option<OverpassPointDto>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(super) struct OverpassPointDto {
    pub(super) lat: f64,
    pub(super) lon: f64,
}

impl From<OverpassPointDto> for Coordinates {
    fn from(point: OverpassPointDto) -> Self {
        Self::new(point.lat, point.lon)
    }
}

impl OverpassResponseDto {
    pub(super) fn into_raw_elements(self) -> Vec<RawElement> {
        self.elements
            .into_iter()
            .map(OverpassElementDto::into_raw_element)
            .collect()
    }
}

impl OverpassElementDto {
    fn into_raw_element(self) -> RawElement {
        let own = flatten(self.geometry);
        // Relations carry their outline on members rather than on the element.
        let geometry = if own.is_empty() {
            self.members
                .into_iter()
                .flat_map(|member| flatten(member.geometry))
                .collect()
        } else {
            own
        };

        RawElement {
            element_type: self.element_type,
            id: self.id,
            lat: self.lat,
            lon: self.lon,
            center: self.center.map(Coordinates::from),
            geometry,
            tags: self.tags,
        }
    }
}

fn flatten(points: Vec<Option<OverpassPointDto>>) -> Vec<Coordinates> {
    points.into_iter().flatten().map(Coordinates::from).collect()
}
