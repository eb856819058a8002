//! Geocoding clients.

use std::collections::HashMap;
use std::future::Future;

use serde::Deserialize;
use tracing::debug;
use vegcity_geo::Coordinate;

use crate::config::GeocoderConfig;
use crate::error::{GeocodeError, Result};

/// A successfully geocoded address.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeocodedPoint {
    /// Resolved position
    pub coordinate: Coordinate,
    /// Neighborhood name, when the provider knows one
    pub neighborhood: Option<String>,
}

impl GeocodedPoint {
    /// A point with no neighborhood attached.
    #[must_use]
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            neighborhood: None,
        }
    }

    /// Builder-style method to attach a neighborhood name.
    #[must_use]
    pub fn with_neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }
}

/// Resolves free-text addresses to coordinates.
///
/// Implementations are expected to do network I/O; callers bound each call
/// with their own deadline on top of any transport-level timeout.
pub trait GeocodeClient {
    /// Resolve `address` to a point, or fail with a [`GeocodeError`].
    fn resolve(&self, address: &str) -> impl Future<Output = Result<GeocodedPoint>> + Send;
}

/// Client for a Nominatim-compatible HTTP geocoder.
#[derive(Debug, Clone)]
pub struct HttpGeocoder {
    inner: reqwest::Client,
    config: GeocoderConfig,
}

impl HttpGeocoder {
    /// Client configured from the environment.
    pub fn new() -> Result<Self> {
        Self::with_config(GeocoderConfig::from_env())
    }

    /// Client with an explicit configuration.
    pub fn with_config(config: GeocoderConfig) -> Result<Self> {
        config.validate()?;

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(GeocodeError::Request)?;

        Ok(Self { inner, config })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }
}

/// Subset of the provider's JSON payload the directory cares about.
#[derive(Debug, Deserialize)]
struct ProviderHit {
    lat: String,
    lon: String,
    #[serde(default)]
    address: ProviderAddress,
}

/// Nominatim nests locality detail under `address`; either of these fields
/// may carry what the directory calls a neighborhood.
#[derive(Debug, Default, Deserialize)]
struct ProviderAddress {
    neighbourhood: Option<String>,
    suburb: Option<String>,
}

impl ProviderHit {
    fn into_point(self) -> Result<GeocodedPoint> {
        let latitude: f64 = self.lat.parse().map_err(|_| {
            GeocodeError::InvalidResponse(format!("unparseable latitude {:?}", self.lat))
        })?;
        let longitude: f64 = self.lon.parse().map_err(|_| {
            GeocodeError::InvalidResponse(format!("unparseable longitude {:?}", self.lon))
        })?;
        let coordinate = Coordinate::checked(latitude, longitude)?;

        Ok(GeocodedPoint {
            coordinate,
            neighborhood: self.address.neighbourhood.or(self.address.suburb),
        })
    }
}

impl GeocodeClient for HttpGeocoder {
    async fn resolve(&self, address: &str) -> Result<GeocodedPoint> {
        let response = self
            .inner
            .get(&self.config.base_url)
            .query(&[
                ("q", address),
                ("format", "jsonv2"),
                ("addressdetails", "1"),
                ("limit", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let hits: Vec<ProviderHit> = response.json().await?;
        debug!(query = address, hits = hits.len(), "geocoder answered");

        // Provider results come best-ranked first.
        match hits.into_iter().next() {
            Some(hit) => hit.into_point(),
            None => Err(GeocodeError::Unresolvable {
                query: address.to_string(),
            }),
        }
    }
}

/// Fixture-backed geocoder for tests and offline development.
///
/// Lookup is case-insensitive on the trimmed address text.
#[derive(Debug, Default, Clone)]
pub struct StaticGeocoder {
    entries: HashMap<String, GeocodedPoint>,
}

impl StaticGeocoder {
    /// An empty fixture set; every resolve fails as unresolvable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to register a known address.
    #[must_use]
    pub fn with_entry(mut self, address: &str, point: GeocodedPoint) -> Self {
        self.entries.insert(Self::key(address), point);
        self
    }

    fn key(address: &str) -> String {
        address.trim().to_lowercase()
    }
}

impl GeocodeClient for StaticGeocoder {
    async fn resolve(&self, address: &str) -> Result<GeocodedPoint> {
        self.entries
            .get(&Self::key(address))
            .cloned()
            .ok_or_else(|| GeocodeError::Unresolvable {
                query: address.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"[
        {
            "place_id": 1620812,
            "lat": "39.9526245",
            "lon": "-75.1652215",
            "display_name": "City Hall, Market Street, Philadelphia, PA",
            "address": {
                "suburb": "Center City",
                "city": "Philadelphia",
                "state": "Pennsylvania"
            }
        }
    ]"#;

    #[test]
    fn parses_a_provider_hit() {
        let mut hits: Vec<ProviderHit> = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let point = hits.pop().unwrap().into_point().unwrap();

        assert!((point.coordinate.latitude - 39.9526245).abs() < 1e-9);
        assert!((point.coordinate.longitude - -75.1652215).abs() < 1e-9);
        assert_eq!(point.neighborhood.as_deref(), Some("Center City"));
    }

    #[test]
    fn neighbourhood_wins_over_suburb() {
        let hit: ProviderHit = serde_json::from_str(
            r#"{"lat": "39.0", "lon": "-75.0",
                "address": {"neighbourhood": "Bella Vista", "suburb": "South Philadelphia"}}"#,
        )
        .unwrap();
        let point = hit.into_point().unwrap();
        assert_eq!(point.neighborhood.as_deref(), Some("Bella Vista"));
    }

    #[test]
    fn rejects_unparseable_coordinates() {
        let hit: ProviderHit =
            serde_json::from_str(r#"{"lat": "not-a-number", "lon": "-75.0"}"#).unwrap();
        assert!(matches!(
            hit.into_point(),
            Err(GeocodeError::InvalidResponse(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let hit: ProviderHit =
            serde_json::from_str(r#"{"lat": "120.0", "lon": "-75.0"}"#).unwrap();
        assert!(matches!(hit.into_point(), Err(GeocodeError::Geo(_))));
    }

    #[test]
    fn static_geocoder_resolves_fixtures() {
        let geocoder = StaticGeocoder::new().with_entry(
            "1221 Locust St",
            GeocodedPoint::new(Coordinate::new(39.9479, -75.1625))
                .with_neighborhood("Washington Square West"),
        );

        let point = tokio_test::block_on(geocoder.resolve("  1221 locust st ")).unwrap();
        assert_eq!(point.neighborhood.as_deref(), Some("Washington Square West"));
    }

    #[test]
    fn static_geocoder_misses_are_unresolvable() {
        let geocoder = StaticGeocoder::new();
        let err = tokio_test::block_on(geocoder.resolve("nowhere")).unwrap_err();
        assert!(matches!(err, GeocodeError::Unresolvable { .. }));
    }

    #[test]
    fn http_geocoder_builds_from_valid_config() {
        let client = HttpGeocoder::with_config(GeocoderConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn http_geocoder_rejects_invalid_config() {
        let client = HttpGeocoder::with_config(GeocoderConfig::default().with_base_url(""));
        assert!(client.is_err());
    }
}
