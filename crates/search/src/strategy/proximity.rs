//! Proximity matching: geocode the query, prefilter with a bounding box,
//! admit by exact distance, order nearest first.

use tracing::debug;
use vegcity_core::Vendor;
use vegcity_geo::{BoundingBox, Coordinate, batch};
use vegcity_geocode::{GeocodeClient, GeocodeError, GeocodedPoint};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::result::{Strategy, StrategyMatch};

/// Address-strategy outcome: the shared [`StrategyMatch`] plus the exact
/// distances that ordered it and the geocoded reference point.
#[derive(Debug, Clone)]
pub struct ProximityMatch {
    /// Where the query resolved to
    pub origin: GeocodedPoint,
    /// Meters from the origin, parallel to `result.vendor_ids`
    pub distances_m: Vec<f64>,
    /// The shared per-strategy outcome, vendors nearest first
    pub result: StrategyMatch,
}

/// Matches vendors within `config.radius_miles` of the geocoded
/// `address_query`, nearest first.
///
/// Geocoding runs under `config.geocode_timeout`; any resolution failure
/// (unresolvable, transport, timeout) fails this strategy only — callers
/// distinguish "zero matches" from "could not locate the query address".
/// Vendors without coordinates are excluded outright. The bounding box is a
/// prefilter; the exact distance comparison alone decides admission.
pub async fn search<G: GeocodeClient>(
    geocoder: &G,
    address_query: &str,
    pool: &[Vendor],
    config: &SearchConfig,
) -> Result<ProximityMatch> {
    let origin = match tokio::time::timeout(
        config.geocode_timeout,
        geocoder.resolve(address_query),
    )
    .await
    {
        Ok(resolved) => resolved?,
        Err(_) => return Err(GeocodeError::Timeout(config.geocode_timeout).into()),
    };

    let bbox = BoundingBox::around(origin.coordinate, config.radius_miles)
        .map_err(GeocodeError::from)?;

    // Cheap rectangle test first; only located vendors participate at all.
    let candidates: Vec<(&Vendor, Coordinate)> = pool
        .iter()
        .filter_map(|vendor| vendor.location.map(|location| (vendor, location)))
        .filter(|(_, location)| bbox.contains(*location))
        .collect();
    let points: Vec<Coordinate> = candidates.iter().map(|(_, location)| *location).collect();

    // Exact admission test, nearest first.
    let hits = batch::within_radius_miles(origin.coordinate, &points, config.radius_miles);

    let mut vendor_ids = Vec::with_capacity(hits.len());
    let mut distances_m = Vec::with_capacity(hits.len());
    for (index, meters) in hits {
        vendor_ids.push(candidates[index].0.id);
        distances_m.push(meters);
    }

    debug!(
        query = address_query,
        in_box = candidates.len(),
        within_radius = vendor_ids.len(),
        "proximity search finished"
    );

    let summary = format!(
        "Found {} results where address is near \"{address_query}\"",
        vendor_ids.len()
    );
    Ok(ProximityMatch {
        origin,
        distances_m,
        result: StrategyMatch::new(Strategy::Address, summary, vendor_ids),
    })
}
