//! Top-level entry point: runs every strategy, merges, ranks, logs.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument, warn};
use vegcity_core::{Vendor, VendorId};
use vegcity_geocode::GeocodeClient;

use crate::config::SearchConfig;
use crate::query_log::QueryLog;
use crate::ranker::{RankedQuery, Ranking, rank};
use crate::result::{Strategy, StrategyFailure, StrategyMatch};
use crate::strategy::{name, proximity, tag};
use crate::tokenize::tokenize;

/// Everything one search call produces.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Merged, deduplicated vendors in presentation order
    pub vendors: Vec<Vendor>,
    /// Successful per-strategy results, in ranking presentation order
    pub results: Vec<StrategyMatch>,
    /// Strategies that could not run
    pub failures: Vec<StrategyFailure>,
    /// Predicted strategy order for this query
    pub ranking: Ranking,
}

impl SearchOutcome {
    /// Number of merged vendors.
    #[must_use]
    pub fn count(&self) -> usize {
        self.vendors.len()
    }

    /// One summary line per successful strategy, presentation order.
    pub fn summaries(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|result| result.summary.as_str())
    }
}

/// The multi-strategy search engine.
///
/// Generic over the geocoding client and the query log so tests and callers
/// choose their own collaborators. Cheap to clone; every search call is
/// stateless against a point-in-time candidate pool.
pub struct SearchEngine<G, L> {
    geocoder: Arc<G>,
    query_log: Arc<L>,
    config: SearchConfig,
}

impl<G, L> Clone for SearchEngine<G, L> {
    fn clone(&self) -> Self {
        Self {
            geocoder: Arc::clone(&self.geocoder),
            query_log: Arc::clone(&self.query_log),
            config: self.config.clone(),
        }
    }
}

impl<G, L> SearchEngine<G, L>
where
    G: GeocodeClient + Send + Sync + 'static,
    L: QueryLog + 'static,
{
    /// Engine with the default configuration.
    pub fn new(geocoder: G, query_log: L) -> Self {
        Self::with_config(geocoder, query_log, SearchConfig::default())
    }

    /// Engine with an explicit configuration.
    pub fn with_config(geocoder: G, query_log: L, config: SearchConfig) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
            query_log: Arc::new(query_log),
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The query log this engine records to.
    #[must_use]
    pub fn query_log(&self) -> &L {
        &self.query_log
    }

    /// Runs every strategy against `pool` and merges their matches into one
    /// deduplicated, ordered vendor list.
    ///
    /// Strategy failures never fail the search: a query no strategy can
    /// serve comes back as an empty outcome with count 0.
    #[instrument(skip(self, pool), fields(pool_size = pool.len()))]
    pub async fn search(&self, query: &str, pool: &[Vendor]) -> SearchOutcome {
        // A quoting error downgrades the token strategies to zero matches;
        // the raw query still drives proximity and ranking.
        let tokens = match tokenize(query) {
            Ok(tokens) => tokens,
            Err(err) => {
                warn!(query, %err, "query failed tokenization");
                Vec::new()
            }
        };

        let ranking = rank(query);
        self.record_query(RankedQuery {
            query: query.to_string(),
            ranking: ranking.clone(),
            created_at: Utc::now(),
        });

        // Independent strategies, joined: a slow or failed proximity lookup
        // cannot suppress name/tag results.
        let (name_match, tag_match, proximity_outcome) = tokio::join!(
            async { name::search(&tokens, pool) },
            async { tag::search(&tokens, pool) },
            proximity::search(self.geocoder.as_ref(), query, pool, &self.config),
        );

        let mut failures = Vec::new();
        let (proximity_match, distance_rank) = match proximity_outcome {
            Ok(hit) => {
                let rank_by_id: HashMap<VendorId, usize> = hit
                    .result
                    .vendor_ids
                    .iter()
                    .enumerate()
                    .map(|(position, id)| (*id, position))
                    .collect();
                (Some(hit), rank_by_id)
            }
            Err(err) => {
                warn!(query, %err, "address strategy failed");
                failures.push(StrategyFailure {
                    strategy: Strategy::Address,
                    reason: err.to_string(),
                });
                (None, HashMap::new())
            }
        };

        // Successful results in presentation order; a failed strategy
        // contributes no summary line.
        let mut results = Vec::with_capacity(3);
        for strategy in ranking.strategies() {
            match strategy {
                Strategy::Name => results.push(name_match.clone()),
                Strategy::Tag => results.push(tag_match.clone()),
                Strategy::Address => {
                    if let Some(hit) = &proximity_match {
                        results.push(hit.result.clone());
                    }
                }
            }
        }

        let vendors = merge(pool, &results, &ranking, &distance_rank);
        debug!(query, matches = vendors.len(), "search finished");

        SearchOutcome {
            vendors,
            results,
            failures,
            ranking,
        }
    }

    /// Fire-and-forget: the response never waits on log durability.
    fn record_query(&self, entry: RankedQuery) {
        let log = Arc::clone(&self.query_log);
        tokio::spawn(async move {
            if let Err(err) = log.record(&entry) {
                warn!(query = entry.query, %err, "query log write failed");
            }
        });
    }
}

/// Union of the strategy match sets, restricted to `pool` and deduplicated.
///
/// Ordering: proximity distance rank where the vendor has one, then the best
/// matched-strategy position in the ranking, then stable pool order. Walking
/// the pool guarantees each vendor appears at most once and that nothing
/// outside the pool sneaks in.
fn merge(
    pool: &[Vendor],
    results: &[StrategyMatch],
    ranking: &Ranking,
    distance_rank: &HashMap<VendorId, usize>,
) -> Vec<Vendor> {
    let mut strategy_rank: HashMap<VendorId, usize> = HashMap::new();
    for result in results {
        let position = ranking.position(result.strategy);
        for id in &result.vendor_ids {
            strategy_rank
                .entry(*id)
                .and_modify(|best| *best = (*best).min(position))
                .or_insert(position);
        }
    }

    let mut merged: Vec<(usize, usize, usize, &Vendor)> = pool
        .iter()
        .enumerate()
        .filter_map(|(pool_index, vendor)| {
            strategy_rank.get(&vendor.id).map(|&best_position| {
                let nearness = distance_rank.get(&vendor.id).copied().unwrap_or(usize::MAX);
                (nearness, best_position, pool_index, vendor)
            })
        })
        .collect();

    merged.sort_by_key(|entry| (entry.0, entry.1, entry.2));
    merged.into_iter().map(|(_, _, _, vendor)| vendor.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_log::InMemoryQueryLog;
    use vegcity_core::Tag;
    use vegcity_geo::Coordinate;
    use vegcity_geocode::{GeocodeError, GeocodedPoint};

    // Reading Terminal Market again; fixtures sit at known distances.
    const MARKET: Coordinate = Coordinate::new(39.9533, -75.1593);

    struct FixtureGeocoder;

    impl GeocodeClient for FixtureGeocoder {
        async fn resolve(&self, address: &str) -> vegcity_geocode::Result<GeocodedPoint> {
            if address.contains("Arch") {
                Ok(GeocodedPoint::new(MARKET))
            } else {
                Err(GeocodeError::Unresolvable {
                    query: address.to_string(),
                })
            }
        }
    }

    fn pool() -> Vec<Vendor> {
        vec![
            Vendor::new("Veggie Grill").approved(),
            Vendor::new("Taco Bell")
                .with_cuisine_tag(Tag::cuisine("mexican", "Mexican cuisine"))
                .with_location(Coordinate::new(39.9496, -75.1503))
                .approved(),
            Vendor::new("El Camion")
                .with_cuisine_tag(Tag::cuisine("mexican", "Mexican cuisine"))
                .approved(),
        ]
    }

    fn engine() -> SearchEngine<FixtureGeocoder, InMemoryQueryLog> {
        SearchEngine::new(FixtureGeocoder, InMemoryQueryLog::new())
    }

    #[tokio::test]
    async fn name_match_flows_through() {
        let pool = pool();
        let outcome = engine().search("Veggie", &pool).await;

        assert_eq!(outcome.count(), 1);
        assert_eq!(outcome.vendors[0].id, pool[0].id);
        assert!(
            outcome
                .summaries()
                .any(|s| s == "Found 1 results where name contains \"Veggie\"")
        );
    }

    #[tokio::test]
    async fn tag_match_includes_unlocated_vendors() {
        let pool = pool();
        let outcome = engine().search("mexican", &pool).await;

        // El Camion has no coordinates; tag matching is independent of
        // geocoding.
        let ids: Vec<VendorId> = outcome.vendors.iter().map(|v| v.id).collect();
        assert!(ids.contains(&pool[1].id));
        assert!(ids.contains(&pool[2].id));
        assert_eq!(outcome.count(), 2);
    }

    #[tokio::test]
    async fn geocode_failure_leaves_siblings_untouched() {
        let pool = pool();
        let outcome = engine().search("mexican", &pool).await;

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].strategy, Strategy::Address);
        assert_eq!(outcome.count(), 2);
        // No summary line for the failed strategy: name + tag only.
        assert_eq!(outcome.results.len(), 2);
    }

    #[tokio::test]
    async fn proximity_orders_the_merge_nearest_first() {
        let market_stall = Vendor::new("Market Stall").with_location(MARKET).approved();
        let pool = vec![
            // Pool order deliberately farthest-first
            Vendor::new("Taco Bell")
                .with_location(Coordinate::new(39.9496, -75.1503))
                .approved(),
            market_stall,
        ];
        let outcome = engine().search("12th and Arch", &pool).await;

        assert_eq!(outcome.count(), 2);
        assert_eq!(outcome.vendors[0].name(), "Market Stall");
        assert_eq!(outcome.vendors[1].name(), "Taco Bell");
    }

    #[tokio::test]
    async fn merged_output_stays_inside_the_pool() {
        let pool = pool();
        let outcome = engine().search("mexican Veggie", &pool).await;

        assert!(outcome.count() <= pool.len());
        for vendor in &outcome.vendors {
            assert!(pool.iter().any(|p| p.id == vendor.id));
        }
    }

    #[tokio::test]
    async fn vendors_matched_twice_appear_once() {
        // "Taco" matches the name; "mexican" matches the tag.
        let pool = pool();
        let outcome = engine().search("Taco mexican", &pool).await;

        let taco_entries = outcome
            .vendors
            .iter()
            .filter(|v| v.id == pool[1].id)
            .count();
        assert_eq!(taco_entries, 1);
    }

    #[tokio::test]
    async fn malformed_query_degrades_to_zero_token_matches() {
        let pool = pool();
        let outcome = engine().search("\"unbalanced", &pool).await;

        // Name and tag see no tokens; proximity still tried the raw text.
        assert_eq!(outcome.count(), 0);
        let name_result = outcome
            .results
            .iter()
            .find(|r| r.strategy == Strategy::Name)
            .unwrap();
        assert_eq!(name_result.count, 0);
    }

    #[tokio::test]
    async fn identical_searches_are_idempotent() {
        let pool = pool();
        let engine = engine();

        let first = engine.search("mexican Veggie", &pool).await;
        let second = engine.search("mexican Veggie", &pool).await;

        let first_ids: Vec<VendorId> = first.vendors.iter().map(|v| v.id).collect();
        let second_ids: Vec<VendorId> = second.vendors.iter().map(|v| v.id).collect();
        assert_eq!(first_ids, second_ids);
        assert_eq!(first.ranking, second.ranking);
    }

    #[tokio::test]
    async fn queries_land_in_the_log() {
        let engine = engine();
        let pool = pool();
        engine.search("mexican vegan", &pool).await;

        // The write is spawned; yield until it lands.
        let mut entries = engine.query_log.entries();
        for _ in 0..100 {
            if !entries.is_empty() {
                break;
            }
            tokio::task::yield_now().await;
            entries = engine.query_log.entries();
        }

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].query, "mexican vegan");
        assert_eq!(entries[0].ranking.leader(), Strategy::Tag);
    }

    #[tokio::test]
    async fn empty_pool_yields_empty_outcome() {
        let outcome = engine().search("anything", &[]).await;
        assert_eq!(outcome.count(), 0);
        assert!(outcome.vendors.is_empty());
    }
}
