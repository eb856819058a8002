//! Name matching: OR of case-insensitive substring tests across tokens.

use vegcity_core::Vendor;

use crate::result::{Strategy, StrategyMatch};

/// Matches vendors whose name contains any token, case-insensitively.
///
/// An empty token list matches nothing. Matches keep candidate-pool order.
pub fn search(tokens: &[String], pool: &[Vendor]) -> StrategyMatch {
    let needles: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

    let vendor_ids = if needles.is_empty() {
        Vec::new()
    } else {
        pool.iter()
            .filter(|vendor| {
                let name = vendor.name().to_lowercase();
                needles.iter().any(|needle| name.contains(needle.as_str()))
            })
            .map(|vendor| vendor.id)
            .collect()
    };

    let summary = format!(
        "Found {} results where name contains {}",
        vendor_ids.len(),
        quoted_or_list(tokens)
    );
    StrategyMatch::new(Strategy::Name, summary, vendor_ids)
}

/// `"a" or "b" or "c"` — each token individually quoted.
fn quoted_or_list(tokens: &[String]) -> String {
    if tokens.is_empty() {
        return "\"\"".to_string();
    }
    tokens
        .iter()
        .map(|token| format!("\"{token}\""))
        .collect::<Vec<_>>()
        .join(" or ")
}
