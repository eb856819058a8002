//! Error taxonomy for the search engine.
//!
//! Every variant is strategy-local by policy: the orchestrator aggregates
//! whatever strategies succeeded and never turns one of these into a
//! whole-search failure.

use thiserror::Error;
use vegcity_geocode::GeocodeError;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// A query-log write that did not stick. Always swallowed by the
/// orchestrator; surfaced only through logging.
#[derive(Debug, Error)]
#[error("query log write failed: {0}")]
pub struct LogWriteError(pub String);

/// Failures local to a single strategy.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Query text could not be tokenized (unbalanced quoting). Callers treat
    /// the affected strategy as having matched no tokens.
    #[error("malformed query: {query:?}")]
    MalformedQuery {
        /// The offending raw query text
        query: String,
    },

    /// The address strategy could not resolve its reference point
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// A best-effort analytics write failed
    #[error(transparent)]
    LogWrite(#[from] LogWriteError),
}
