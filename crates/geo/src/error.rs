//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur constructing geometry inputs.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Latitude or longitude outside the valid degree ranges
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Negative or non-finite search radius
    #[error("invalid search radius: {0} miles")]
    InvalidRadius(f64),
}
