//! Per-strategy search outcomes.

use serde::{Deserialize, Serialize};
use vegcity_core::VendorId;

/// One of the independent matching algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Substring match over vendor names
    Name,
    /// Substring match over tag names, expanded to tagged vendors
    Tag,
    /// Geocoded radius match over vendor locations
    Address,
}

impl Strategy {
    /// Fixed default presentation order; also the ranker's tie-break order.
    pub const DEFAULT_ORDER: [Self; 3] = [Self::Name, Self::Tag, Self::Address];

    /// Stable identifier used in logs and persisted rankings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Tag => "tag",
            Self::Address => "address",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single strategy found for one query.
///
/// Ephemeral: constructed per query, never persisted. `vendor_ids` is
/// distance-ordered for the address strategy and pool-ordered otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMatch {
    /// Which strategy produced this
    pub strategy: Strategy,
    /// Number of matched vendors
    pub count: usize,
    /// Human-readable line for the results page
    pub summary: String,
    /// Matched vendors
    pub vendor_ids: Vec<VendorId>,
}

impl StrategyMatch {
    pub(crate) fn new(strategy: Strategy, summary: String, vendor_ids: Vec<VendorId>) -> Self {
        Self {
            strategy,
            count: vendor_ids.len(),
            summary,
            vendor_ids,
        }
    }

    /// Whether the strategy matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendor_ids.is_empty()
    }
}

/// A strategy that could not run to completion.
///
/// Surfaced for observability; never fatal to the search that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyFailure {
    /// Which strategy failed
    pub strategy: Strategy,
    /// Human-readable failure description
    pub reason: String,
}
