//! Predicts which strategy a raw query most likely intends.
//!
//! The ranking is presentation-only: it orders summaries and breaks ties in
//! the merged result, but never gates which strategies run. It must be
//! deterministic so identical queries always rank identically — the rankings
//! are persisted and compared against real outcomes offline.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::result::Strategy;

/// Words that strongly suggest a street address when they stand alone as a
/// token.
static STREET_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "st", "street", "ave", "avenue", "blvd", "boulevard", "rd", "road", "ln", "lane", "dr",
        "drive", "ct", "court", "pl", "place", "pike", "ter", "terrace", "hwy", "highway",
    ]
    .into_iter()
    .collect()
});

/// Tokens longer than this stop looking like a vendor name or tag.
const SHORT_TOKEN_LEN: usize = 12;

/// Strategies ordered by predicted likelihood, most likely first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking(Vec<Strategy>);

impl Ranking {
    /// The ordered strategies.
    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.0
    }

    /// The strategy predicted most likely.
    #[must_use]
    pub fn leader(&self) -> Strategy {
        self.0[0]
    }

    /// Position of `strategy` in the ranking.
    pub(crate) fn position(&self, strategy: Strategy) -> usize {
        self.0
            .iter()
            .position(|s| *s == strategy)
            .unwrap_or(self.0.len())
    }
}

impl Default for Ranking {
    fn default() -> Self {
        Self(Strategy::DEFAULT_ORDER.to_vec())
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for strategy in &self.0 {
            if !first {
                f.write_str(" > ")?;
            }
            f.write_str(strategy.as_str())?;
            first = false;
        }
        Ok(())
    }
}

/// Ranks the strategies for a raw query.
///
/// Signals, strongest first: digits or a street-suffix word anywhere puts
/// the address strategy on top; several short alphabetic tokens suggest
/// tags; a single short token suggests a name. Ties fall back to the fixed
/// default order (name, tag, address).
#[must_use]
pub fn rank(query: &str) -> Ranking {
    // Plain whitespace split: ranking must not fail on quoting the
    // tokenizer would reject.
    let words: Vec<&str> = query.split_whitespace().collect();
    if words.is_empty() {
        return Ranking::default();
    }

    let has_digits = words
        .iter()
        .any(|word| word.chars().any(|c| c.is_ascii_digit()));
    let has_street_suffix = words.iter().any(|word| {
        let bare = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        STREET_SUFFIXES.contains(bare.as_str())
    });
    if has_digits || has_street_suffix {
        return Ranking(vec![Strategy::Address, Strategy::Name, Strategy::Tag]);
    }

    let all_short_alphabetic = words
        .iter()
        .all(|word| word.len() <= SHORT_TOKEN_LEN && word.chars().all(char::is_alphabetic));
    if words.len() >= 2 && all_short_alphabetic {
        return Ranking(vec![Strategy::Tag, Strategy::Name, Strategy::Address]);
    }

    Ranking::default()
}

/// A raw query plus its predicted ranking, handed to the query log so the
/// prediction can be scored against real outcomes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedQuery {
    /// The query text exactly as the user typed it
    pub query: String,
    /// Predicted strategy order
    pub ranking: Ranking,
    /// When the query was made
    pub created_at: DateTime<Utc>,
}

impl RankedQuery {
    /// Ranks `query` and stamps the entry with the current time.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let ranking = rank(&query);
        Self {
            query,
            ranking,
            created_at: Utc::now(),
        }
    }
}
