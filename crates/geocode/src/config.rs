//! Configuration for the geocoding client.
//!
//! Environment-based with sensible defaults, builder methods for overrides.

use crate::error::{GeocodeError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default public Nominatim search endpoint.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Default identifying agent; public Nominatim rejects anonymous clients.
const DEFAULT_USER_AGENT: &str = "vegcity-geocode/0.3";

/// Geocoder client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Search endpoint URL
    pub base_url: String,
    /// Value sent as the User-Agent header
    pub user_agent: String,
    /// Per-request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
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

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl GeocoderConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `VEGCITY_GEOCODER_URL`: search endpoint URL
    /// - `VEGCITY_GEOCODER_AGENT`: User-Agent header value
    /// - `VEGCITY_GEOCODER_TIMEOUT_SECS`: per-request timeout in seconds
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("VEGCITY_GEOCODER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let user_agent =
            env::var("VEGCITY_GEOCODER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let timeout = env::var("VEGCITY_GEOCODER_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map_or(Duration::from_secs(10), Duration::from_secs);

        Self {
            base_url,
            user_agent,
            timeout,
        }
    }

    /// Configuration pointing at a locally hosted Nominatim.
    #[must_use]
    pub fn development() -> Self {
        Self {
            base_url: "http://localhost:8088/search".to_string(),
            timeout: Duration::from_secs(3),
            ..Self::default()
        }
    }

    /// Builder-style method to set the endpoint URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the User-Agent value.
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Builder-style method to set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(GeocodeError::config("base_url cannot be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GeocodeError::config(
                "base_url must start with http:// or https://",
            ));
        }
        if self.timeout.is_zero() {
            return Err(GeocodeError::config("timeout cannot be zero"));
        }
        Ok(())
    }
}
