//! Batch distance computation for prefiltered candidate sets.
//!
//! Proximity search narrows the vendor pool with a bounding box, then needs
//! the exact distance to every survivor. These helpers keep that hot loop in
//! one place, parallel when the `parallel` feature is on.

use crate::distance::{haversine_meters, meters_to_miles};
use crate::Coordinate;

/// Distances in meters from `origin` to each point, preserving input order.
#[must_use]
pub fn distances_from(origin: Coordinate, points: &[Coordinate]) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        points
            .par_iter()
            .map(|point| haversine_meters(origin, *point))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        points
            .iter()
            .map(|point| haversine_meters(origin, *point))
            .collect()
    }
}

/// Indices and distances (in meters) of the points within `radius_miles` of
/// `origin`, nearest first.
///
/// The admission test happens in miles because that is how directory search
/// radii are specified. Ties keep input order; the sort is stable.
#[must_use]
pub fn within_radius_miles(
    origin: Coordinate,
    points: &[Coordinate],
    radius_miles: f64,
) -> Vec<(usize, f64)> {
    let mut hits: Vec<(usize, f64)> = distances_from(origin, points)
        .into_iter()
        .enumerate()
        .filter(|(_, meters)| meters_to_miles(*meters) <= radius_miles)
        .collect();

    hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    hits
}
