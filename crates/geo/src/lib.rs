//! Geometry for vendor proximity search.
//!
//! This crate provides:
//! - Great-circle distance on the spherical Earth model
//! - Meters/miles conversions
//! - Axis-aligned bounding boxes that conservatively cover a radius disk
//! - Batch distance computation with optional parallelism
//!
//! # Example
//!
//! ```
//! use vegcity_geo::{haversine_meters, meters_to_miles, Coordinate};
//!
//! let city_hall = Coordinate::new(39.9526, -75.1652);
//! let liberty_bell = Coordinate::new(39.9496, -75.1503);
//!
//! let meters = haversine_meters(city_hall, liberty_bell);
//! assert!(meters_to_miles(meters) < 1.0);
//! ```

pub mod batch;
mod bbox;
mod distance;
mod error;

pub use bbox::BoundingBox;
pub use distance::{
    EARTH_RADIUS_M, METERS_PER_MILE, haversine_meters, meters_to_miles, miles_to_meters,
};
pub use error::{GeoError, Result};

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checks.
    #[inline]
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, rejecting out-of-range values.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinate = Self::new(latitude, longitude);
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "({latitude}, {longitude}) is outside the valid lat/lon range"
            )))
        }
    }

    /// Whether both components are inside the valid degree ranges.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Both components in radians.
    #[inline]
    pub(crate) fn radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
