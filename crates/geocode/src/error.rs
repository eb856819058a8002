//! Error types for the geocoding client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for geocoding operations.
pub type Result<T> = std::result::Result<T, GeocodeError>;

/// Failures while resolving an address to a coordinate.
///
/// Every variant is strategy-local: a proximity search that hits one of these
/// is excluded from the merged result, but sibling strategies still run.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP transport failure
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider did not answer within the configured budget
    #[error("geocoding timed out after {0:?}")]
    Timeout(Duration),

    /// Provider answered but had no candidate for the query
    #[error("no geocoding result for {query:?}")]
    Unresolvable {
        /// The address text that could not be resolved
        query: String,
    },

    /// Provider payload could not be interpreted
    #[error("malformed geocoding response: {0}")]
    InvalidResponse(String),

    /// Provider returned coordinates outside the valid ranges
    #[error(transparent)]
    Geo(#[from] vegcity_geo::GeoError),

    /// Client configuration error
    #[error("geocoder configuration error: {0}")]
    Config(String),
}

impl GeocodeError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether an identical later call could plausibly succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Timeout(_))
    }
}
