//! Geocoding provider client for the VegCity directory.
//!
//! The provider is a black box that turns free-text addresses into a
//! coordinate plus an optional neighborhood name. [`HttpGeocoder`] talks to a
//! Nominatim-compatible endpoint; [`StaticGeocoder`] serves fixtures for
//! tests and offline development. Both implement [`GeocodeClient`], the
//! boundary the search engine is generic over.

mod client;
mod config;
mod error;

pub use client::{GeocodeClient, GeocodedPoint, HttpGeocoder, StaticGeocoder};
pub use config::GeocoderConfig;
pub use error::{GeocodeError, Result};
