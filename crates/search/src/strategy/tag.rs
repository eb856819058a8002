//! Tag matching: tokens against cuisine and feature tag names, expanded to
//! the tagged vendors.

use vegcity_core::Vendor;

use crate::result::{Strategy, StrategyMatch};

/// Matches vendors carrying any tag whose *name* contains any token,
/// case-insensitively. Descriptions never participate.
///
/// The result is a set: a vendor tagged by several matching tags appears
/// once. An empty token list matches nothing.
pub fn search(tokens: &[String], pool: &[Vendor]) -> StrategyMatch {
    let needles: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

    let vendor_ids = if needles.is_empty() {
        Vec::new()
    } else {
        // One pass over the pool, one entry per vendor: the dedup the
        // tag-expansion union would otherwise need falls out for free.
        pool.iter()
            .filter(|vendor| {
                vendor.tags().any(|tag| {
                    let tag_name = tag.name().to_lowercase();
                    needles.iter().any(|needle| tag_name.contains(needle.as_str()))
                })
            })
            .map(|vendor| vendor.id)
            .collect()
    };

    let summary = format!(
        "Found {} results with tags matching \"{}\"",
        vendor_ids.len(),
        tokens.join(", ")
    );
    StrategyMatch::new(Strategy::Tag, summary, vendor_ids)
}
