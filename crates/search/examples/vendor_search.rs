//! Search a small in-memory directory three different ways.
//!
//! Run with:
//! ```bash
//! cargo run --example vendor_search
//! ```

use vegcity_core::{InMemoryVendorStore, Tag, Vendor, VendorStore};
use vegcity_geo::Coordinate;
use vegcity_geocode::{GeocodedPoint, StaticGeocoder};
use vegcity_search::{InMemoryQueryLog, SearchEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut store = InMemoryVendorStore::new();
    store.insert(
        Vendor::new("Veggie Grill")
            .with_address("500 Market St")
            .with_location(Coordinate::new(39.9509, -75.1500))
            .with_neighborhood("Old City")
            .approved(),
    );
    store.insert(
        Vendor::new("Taco Bell")
            .with_cuisine_tag(Tag::cuisine("mexican", "Mexican cuisine"))
            .with_location(Coordinate::new(39.9496, -75.1503))
            .approved(),
    );
    store.insert(
        Vendor::new("El Camion")
            .with_cuisine_tag(Tag::cuisine("mexican", "Mexican cuisine"))
            .with_feature_tag(Tag::feature("open late", "Open past midnight"))
            .approved(),
    );

    let geocoder = StaticGeocoder::new().with_entry(
        "12th and Arch",
        GeocodedPoint::new(Coordinate::new(39.9533, -75.1593)).with_neighborhood("Center City"),
    );
    let engine = SearchEngine::new(geocoder, InMemoryQueryLog::new());
    let pool = store.approved();

    for query in ["Veggie", "mexican", "12th and Arch"] {
        let outcome = engine.search(query, &pool).await;

        println!("query: {query:?} (predicted: {})", outcome.ranking);
        for summary in outcome.summaries() {
            println!("  {summary}");
        }
        for vendor in &outcome.vendors {
            println!("  - {}", vendor.name());
        }
        println!();
    }

    Ok(())
}
