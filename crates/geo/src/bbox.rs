//! Axis-aligned bounding boxes for radius prefiltering.
//!
//! A box built by [`BoundingBox::around`] covers every point within the
//! requested radius of its center. Membership in the box never admits a
//! candidate by itself; it only spares the exact distance computation for
//! everything clearly outside.

use crate::distance::{EARTH_RADIUS_M, miles_to_meters};
use crate::{Coordinate, GeoError, Result};

/// Rectangular lat/lon region with inclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    /// Southern edge in degrees
    pub lat_floor: f64,
    /// Northern edge in degrees
    pub lat_ceil: f64,
    /// Western edge in degrees (may extend past -180 near the antimeridian)
    pub lon_floor: f64,
    /// Eastern edge in degrees (may extend past 180 near the antimeridian)
    pub lon_ceil: f64,
}

impl BoundingBox {
    /// Smallest lat/lon-aligned box guaranteed to cover every point within
    /// `radius_miles` of `center`.
    ///
    /// A radius of zero is legal and yields a degenerate box containing only
    /// the center itself. Negative or non-finite radii are rejected.
    pub fn around(center: Coordinate, radius_miles: f64) -> Result<Self> {
        if !center.is_valid() {
            return Err(GeoError::InvalidCoordinate(center.to_string()));
        }
        if !radius_miles.is_finite() || radius_miles < 0.0 {
            return Err(GeoError::InvalidRadius(radius_miles));
        }

        // The hair of padding keeps points sitting exactly on the radius
        // inside the box despite float rounding; overestimating is always
        // safe for a prefilter.
        let radius_rad = miles_to_meters(radius_miles) / EARTH_RADIUS_M * (1.0 + 1e-9);
        let lat_delta = radius_rad.to_degrees();
        let lat_floor = (center.latitude - lat_delta).max(-90.0);
        let lat_ceil = (center.latitude + lat_delta).min(90.0);

        // A degree of longitude shrinks toward the poles, so the half-width is
        // sized for the latitude in the band farthest from the equator. The
        // asin form majorizes the true maximum longitude deviation of the
        // radius disk, keeping the box a superset at every latitude.
        let touches_pole = lat_ceil >= 90.0 || lat_floor <= -90.0;
        let cos_extreme = lat_floor
            .abs()
            .max(lat_ceil.abs())
            .to_radians()
            .cos();
        let sin_ratio = radius_rad.sin() / cos_extreme;
        let lon_delta = if touches_pole || !(sin_ratio < 1.0) {
            180.0
        } else {
            sin_ratio.asin().to_degrees()
        };

        Ok(Self {
            lat_floor,
            lat_ceil,
            lon_floor: center.longitude - lon_delta,
            lon_ceil: center.longitude + lon_delta,
        })
    }

    /// Whether `point` lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        point.latitude >= self.lat_floor
            && point.latitude <= self.lat_ceil
            && self.contains_longitude(point.longitude)
    }

    /// The box may extend past ±180 when its center sits near the
    /// antimeridian; test the wrapped copies of the longitude as well.
    fn contains_longitude(&self, longitude: f64) -> bool {
        [longitude, longitude - 360.0, longitude + 360.0]
            .iter()
            .any(|lon| *lon >= self.lon_floor && *lon <= self.lon_ceil)
    }

    /// Corner tuple in the (lat floor, lat ceil, lon floor, lon ceil) order
    /// query planners expect.
    #[must_use]
    pub fn corners(&self) -> (f64, f64, f64, f64) {
        (self.lat_floor, self.lat_ceil, self.lon_floor, self.lon_ceil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haversine_meters;

    const CITY_HALL: Coordinate = Coordinate::new(39.9526, -75.1652);

    /// Point at `distance_m` from `origin` along `bearing_deg`, on the sphere.
    fn destination(origin: Coordinate, bearing_deg: f64, distance_m: f64) -> Coordinate {
        let (lat1, lon1) = (origin.latitude.to_radians(), origin.longitude.to_radians());
        let bearing = bearing_deg.to_radians();
        let angular = distance_m / EARTH_RADIUS_M;

        let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
        let lon2 = lon1
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        let mut lon_deg = lon2.to_degrees();
        if lon_deg > 180.0 {
            lon_deg -= 360.0;
        } else if lon_deg < -180.0 {
            lon_deg += 360.0;
        }
        Coordinate::new(lat2.to_degrees(), lon_deg)
    }

    #[test]
    fn rejects_negative_radius() {
        assert!(matches!(
            BoundingBox::around(CITY_HALL, -0.1),
            Err(GeoError::InvalidRadius(_))
        ));
    }

    #[test]
    fn rejects_invalid_center() {
        let bad = Coordinate::new(95.0, 0.0);
        assert!(matches!(
            BoundingBox::around(bad, 0.75),
            Err(GeoError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn zero_radius_contains_only_center() {
        let bbox = BoundingBox::around(CITY_HALL, 0.0).unwrap();
        assert!(bbox.contains(CITY_HALL));
        assert!(!bbox.contains(Coordinate::new(39.9527, -75.1652)));
    }

    #[test]
    fn box_is_centered_and_ordered() {
        let bbox = BoundingBox::around(CITY_HALL, 0.75).unwrap();
        assert!(bbox.lat_floor < CITY_HALL.latitude && CITY_HALL.latitude < bbox.lat_ceil);
        assert!(bbox.lon_floor < CITY_HALL.longitude && CITY_HALL.longitude < bbox.lon_ceil);
    }

    #[test]
    fn excludes_points_well_outside_radius() {
        let bbox = BoundingBox::around(CITY_HALL, 0.75).unwrap();
        // NYC is ~80 miles away
        assert!(!bbox.contains(Coordinate::new(40.7128, -74.0060)));
    }

    #[test]
    fn covers_radius_disk_across_latitude_grid() {
        // Sample latitudes from the equator to near the poles, plus every
        // compass direction at the full radius.
        let latitudes = [-89.99, -66.5, -45.0, -23.4, 0.0, 23.4, 45.0, 66.5, 89.99];
        let radius_miles = 0.75;
        let radius_m = miles_to_meters(radius_miles);

        for &lat in &latitudes {
            let center = Coordinate::new(lat, -75.0);
            let bbox = BoundingBox::around(center, radius_miles).unwrap();
            for bearing in (0..360).step_by(15) {
                let point = destination(center, f64::from(bearing), radius_m);
                assert!(
                    bbox.contains(point),
                    "lat {lat} bearing {bearing}: {point} escaped {bbox:?}"
                );
            }
        }
    }

    #[test]
    fn wraps_across_the_antimeridian() {
        let center = Coordinate::new(0.0, 179.999);
        let bbox = BoundingBox::around(center, 0.75).unwrap();
        let east = destination(center, 90.0, miles_to_meters(0.5));
        assert!(east.longitude < 0.0, "crossed the antimeridian: {east}");
        assert!(bbox.contains(east));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The box is a superset of the radius disk: any point at up to
            /// the radius from the center stays inside.
            #[test]
            fn box_covers_disk(
                lat in -89.5f64..89.5,
                lon in -180.0f64..180.0,
                radius_miles in 0.01f64..5.0,
                bearing in 0.0f64..360.0,
                fraction in 0.0f64..=1.0,
            ) {
                let center = Coordinate::new(lat, lon);
                let bbox = BoundingBox::around(center, radius_miles).unwrap();
                let distance_m = miles_to_meters(radius_miles) * fraction;
                let point = destination(center, bearing, distance_m);

                prop_assert!(
                    haversine_meters(center, point) <= miles_to_meters(radius_miles) + 1e-6
                );
                prop_assert!(bbox.contains(point), "{point} escaped {bbox:?}");
            }
        }
    }
}
