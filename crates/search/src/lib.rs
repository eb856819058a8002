//! Multi-strategy vendor search for the VegCity directory.
//!
//! Given free-text input, the engine runs three independent strategies —
//! name match, tag match, and geographic proximity — merges their matches,
//! and returns one ranked, deduplicated vendor list with a human-readable
//! summary per strategy. A ranker predicts which strategy the user most
//! likely intended; the prediction orders presentation and is persisted for
//! offline analysis, but never gates which strategies run.
//!
//! # Example
//!
//! ```
//! use vegcity_core::Vendor;
//! use vegcity_geo::Coordinate;
//! use vegcity_geocode::{GeocodedPoint, StaticGeocoder};
//! use vegcity_search::{NoopQueryLog, SearchEngine};
//!
//! let geocoder = StaticGeocoder::new().with_entry(
//!     "12th and Arch",
//!     GeocodedPoint::new(Coordinate::new(39.9533, -75.1593)),
//! );
//! let engine = SearchEngine::new(geocoder, NoopQueryLog);
//!
//! let pool = vec![
//!     Vendor::new("Veggie Grill").approved(),
//!     Vendor::new("Taco Bell").approved(),
//! ];
//!
//! let outcome = tokio_test::block_on(engine.search("Veggie", &pool));
//! assert_eq!(outcome.count(), 1);
//! assert_eq!(outcome.vendors[0].name(), "Veggie Grill");
//! ```

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod query_log;
pub mod ranker;
pub mod result;
pub mod strategy;
pub mod tokenize;

pub use config::{DEFAULT_RADIUS_MILES, SearchConfig};
pub use error::{LogWriteError, Result, SearchError};
pub use orchestrator::{SearchEngine, SearchOutcome};
pub use query_log::{InMemoryQueryLog, NoopQueryLog, QueryLog};
pub use ranker::{RankedQuery, Ranking, rank};
pub use result::{Strategy, StrategyFailure, StrategyMatch};
pub use tokenize::tokenize;
