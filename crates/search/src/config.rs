//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default admission radius for the address strategy, in miles.
pub const DEFAULT_RADIUS_MILES: f64 = 0.75;

const DEFAULT_GEOCODE_TIMEOUT: Duration = Duration::from_secs(5);

/// Tunables for one search engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Admission radius for the address strategy. Zero is legal and matches
    /// only vendors at the exact geocoded point.
    pub radius_miles: f64,
    /// Upper bound on one geocoding round trip
    #[serde(with = "duration_secs")]
    pub geocode_timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(deserializer)?))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_miles: DEFAULT_RADIUS_MILES,
            geocode_timeout: DEFAULT_GEOCODE_TIMEOUT,
        }
    }
}

impl SearchConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `VEGCITY_SEARCH_RADIUS_MILES`: address-strategy admission radius
    /// - `VEGCITY_GEOCODE_TIMEOUT_SECS`: geocoding budget in seconds
    #[must_use]
    pub fn from_env() -> Self {
        let radius_miles = env::var("VEGCITY_SEARCH_RADIUS_MILES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RADIUS_MILES);
        let geocode_timeout = env::var("VEGCITY_GEOCODE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map_or(DEFAULT_GEOCODE_TIMEOUT, Duration::from_secs);

        Self {
            radius_miles,
            geocode_timeout,
        }
    }

    /// Builder-style method to set the admission radius.
    #[must_use]
    pub fn with_radius_miles(mut self, radius_miles: f64) -> Self {
        self.radius_miles = radius_miles;
        self
    }

    /// Builder-style method to set the geocoding budget.
    #[must_use]
    pub fn with_geocode_timeout(mut self, timeout: Duration) -> Self {
        self.geocode_timeout = timeout;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> vegcity_geo::Result<()> {
        if !self.radius_miles.is_finite() || self.radius_miles < 0.0 {
            return Err(vegcity_geo::GeoError::InvalidRadius(self.radius_miles));
        }
        Ok(())
    }
}
