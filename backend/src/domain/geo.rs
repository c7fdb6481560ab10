//! Great-circle distance and coordinate helpers.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Coordinate validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoordinatesError {
    /// Latitude was not finite or outside `[-90, 90]`.
    #[error("latitude must be finite and within [-90, 90]")]
    Latitude,
    /// Longitude was not finite or outside `[-180, 180]`.
    #[error("longitude must be finite and within [-180, 180]")]
    Longitude,
}

impl Coordinates {
    /// Build a coordinate without validation.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Examples
    /// ```
    /// use dining_backend::domain::{Coordinates, CoordinatesError};
    ///
    /// assert!(Coordinates::try_new(45.4215, -75.6972).is_ok());
    /// assert_eq!(
    ///     Coordinates::try_new(91.0, 0.0),
    ///     Err(CoordinatesError::Latitude)
    /// );
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinatesError> {
        if !valid_latitude(latitude) {
            return Err(CoordinatesError::Latitude);
        }
        if !valid_longitude(longitude) {
            return Err(CoordinatesError::Longitude);
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Whether both components are finite and within WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        valid_latitude(self.latitude) && valid_longitude(self.longitude)
    }
}

#[rustfmt::skip]
fn valid_longitude(value: f64) -> bool { value.is_finite() && (-180.0..=180.0).contains(&value) }

#[rustfmt::skip]
fn valid_latitude(value: f64) -> bool { value.is_finite() && (-90.0..=90.0).contains(&value) }

/// Haversine distance between two points in kilometres.
///
/// # Examples
/// ```
/// use dining_backend::domain::{Coordinates, distance_km};
///
/// let ottawa = Coordinates::new(45.4215, -75.6972);
/// let montreal = Coordinates::new(45.5019, -73.5674);
/// let km = distance_km(ottawa, montreal);
/// assert!((km - 166.0).abs() < 2.0);
/// ```
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` past 1 for near-antipodal pairs.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Arithmetic mean of `points`, or `None` when there are none.
pub fn centroid(points: &[Coordinates]) -> Option<Coordinates> {
    if points.is_empty() {
        return None;
    }
    let count = points.len() as f64;
    let (lat_sum, lng_sum) = points.iter().fold((0.0, 0.0), |(lat, lng), point| {
        (lat + point.latitude, lng + point.longitude)
    });
    Some(Coordinates::new(lat_sum / count, lng_sum / count))
}

/// Round a distance to one decimal place, the precision shown to users and
/// used for ordering and radius checks.
///
/// The value is read back from its one-decimal rendering, so it always agrees
/// with the `"x.x km"` label: `5.05` is stored just below the tie and both
/// come out as `5.0`.
pub fn round_to_tenth(km: f64) -> f64 {
    format!("{km:.1}").parse().unwrap_or(km)
}

#[cfg(test)]
mod tests {
    //! Unit coverage for haversine symmetry and centroid maths.

    use super::*;
    use rstest::rstest;

    const OTTAWA: Coordinates = Coordinates::new(45.4215, -75.6972);

    #[rstest]
    #[case::ottawa_montreal(Coordinates::new(45.5019, -73.5674))]
    #[case::antipodal_ish(Coordinates::new(-45.0, 104.0))]
    #[case::date_line(Coordinates::new(10.0, 179.9))]
    #[case::south_pole(Coordinates::new(-90.0, 0.0))]
    fn distance_is_symmetric(#[case] other: Coordinates) {
        let there = distance_km(OTTAWA, other);
        let back = distance_km(other, OTTAWA);
        assert!((there - back).abs() < 1e-9, "{there} != {back}");
        assert!(there >= 0.0);
    }

    #[rstest]
    #[case(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0))]
    #[case(Coordinates::new(45.0, -75.0), Coordinates::new(-45.0, 105.0))]
    #[case(Coordinates::new(90.0, 0.0), Coordinates::new(-90.0, 0.0))]
    fn antipodal_points_are_half_a_circumference_apart(
        #[case] from: Coordinates,
        #[case] to: Coordinates,
    ) {
        let km = distance_km(from, to);
        assert!(km.is_finite(), "distance should never be NaN");
        assert!((km - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[rstest]
    fn identical_points_are_zero_apart() {
        assert_eq!(distance_km(OTTAWA, OTTAWA), 0.0);
    }

    #[rstest]
    fn pure_latitude_offset_matches_arc_length() {
        let north = Coordinates::new(OTTAWA.latitude + 1.0, OTTAWA.longitude);
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((distance_km(OTTAWA, north) - expected).abs() < 1e-6);
    }

    #[rstest]
    fn centroid_averages_points() {
        let points = [
            Coordinates::new(45.0, -75.0),
            Coordinates::new(46.0, -76.0),
            Coordinates::new(47.0, -74.0),
        ];
        let centre = centroid(&points).expect("centroid of three points");
        assert!((centre.latitude - 46.0).abs() < 1e-12);
        assert!((centre.longitude + 75.0).abs() < 1e-12);
    }

    #[rstest]
    fn centroid_of_nothing_is_none() {
        assert_eq!(centroid(&[]), None);
    }

    #[rstest]
    #[case(2.14, 2.1)]
    #[case(2.16, 2.2)]
    #[case(0.04, 0.0)]
    #[case(5.05, 5.0)]
    #[case(2.45, 2.5)]
    fn rounds_to_one_decimal(#[case] raw: f64, #[case] expected: f64) {
        assert!((round_to_tenth(raw) - expected).abs() < 1e-12);
    }

    #[rstest]
    #[case(f64::NAN, 0.0, CoordinatesError::Latitude)]
    #[case(0.0, 180.5, CoordinatesError::Longitude)]
    fn rejects_invalid_coordinates(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: CoordinatesError,
    ) {
        assert_eq!(Coordinates::try_new(latitude, longitude), Err(expected));
    }
}
