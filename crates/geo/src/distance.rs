//! Great-circle distance on the spherical Earth model.

use crate::Coordinate;

/// Mean Earth radius in meters (spherical approximation).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// One statute mile in meters.
pub const METERS_PER_MILE: f64 = 1_609.344;

/// Great-circle distance between two points in meters, via the haversine
/// formula.
///
/// # Example
/// ```
/// use vegcity_geo::{haversine_meters, Coordinate};
///
/// let city_hall = Coordinate::new(39.9526, -75.1652);
/// let liberty_bell = Coordinate::new(39.9496, -75.1503);
///
/// let meters = haversine_meters(city_hall, liberty_bell);
/// assert!((meters - 1313.0).abs() < 50.0);
/// ```
#[inline]
#[must_use]
pub fn haversine_meters(from: Coordinate, to: Coordinate) -> f64 {
    let (lat1, lon1) = from.radians();
    let (lat2, lon2) = to.radians();

    let half_dlat = (lat2 - lat1) / 2.0;
    let half_dlon = (lon2 - lon1) / 2.0;

    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);

    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Converts meters to statute miles.
#[inline]
#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Converts statute miles to meters.
#[inline]
#[must_use]
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    // Philadelphia landmarks with well-known separations.
    const CITY_HALL: Coordinate = Coordinate::new(39.9526, -75.1652);
    const LIBERTY_BELL: Coordinate = Coordinate::new(39.9496, -75.1503);
    const NYC_CITY_HALL: Coordinate = Coordinate::new(40.7128, -74.0060);

    #[test]
    fn city_hall_to_liberty_bell() {
        let meters = haversine_meters(CITY_HALL, LIBERTY_BELL);
        // Roughly 1.3 km across Center City
        assert!((meters - 1313.0).abs() < 50.0, "got {meters}");
    }

    #[test]
    fn philadelphia_to_new_york() {
        let meters = haversine_meters(CITY_HALL, NYC_CITY_HALL);
        // Roughly 130 km
        assert!((meters - 129_600.0).abs() < 2_000.0, "got {meters}");
    }

    #[test]
    fn zero_distance_at_same_point() {
        assert!(haversine_meters(CITY_HALL, CITY_HALL).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let out = haversine_meters(CITY_HALL, LIBERTY_BELL);
        let back = haversine_meters(LIBERTY_BELL, CITY_HALL);
        assert!((out - back).abs() < 1e-9);
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let north = Coordinate::new(90.0, 0.0);
        let south = Coordinate::new(-90.0, 0.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_M;
        assert!((haversine_meters(north, south) - half_circumference).abs() < 1.0);
    }

    #[test]
    fn mile_conversions_round_trip() {
        assert!((meters_to_miles(METERS_PER_MILE) - 1.0).abs() < 1e-12);
        assert!((miles_to_meters(meters_to_miles(1234.5)) - 1234.5).abs() < 1e-9);
    }

    #[test]
    fn quarter_mile_is_about_402_meters() {
        assert!((miles_to_meters(0.25) - 402.336).abs() < 1e-9);
    }
}
