use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::{CatalogMapping, CatalogProduct, Transaction};
use crate::types::ProductId;

/// Builds the id-to-product lookup from a raw catalog listing. Keys stay in
/// the catalog's own namespace.
pub fn build_catalog_mapping(products: Vec<CatalogProduct>) -> CatalogMapping {
    products
        .into_iter()
        .map(|product| (product.id.to_string(), product))
        .collect()
}

/// Result of matching local product ids against the external catalog.
#[derive(Debug, Clone)]
pub struct EnrichmentSummary {
    pub catalog_size: usize,
    pub local_product_count: usize,
    pub matched_count: usize,
    /// `100 * matched / local`, two decimals; 0 when no local ids exist.
    pub success_rate: Decimal,
    /// Local ids absent from the catalog, in discovery order.
    pub unmatched_ids: Vec<ProductId>,
}

/// Best-effort join between local product ids and the external catalog.
///
/// The two id namespaces are not guaranteed to overlap, so zero matches is a
/// reportable outcome rather than a failure.
pub fn match_catalog(transactions: &[Transaction], mapping: &CatalogMapping) -> EnrichmentSummary {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut local_ids: Vec<&ProductId> = Vec::new();

    for transaction in transactions {
        if seen.insert(transaction.product_id.as_str()) {
            local_ids.push(&transaction.product_id);
        }
    }

    let matched_count = local_ids.iter().filter(|id| mapping.contains_key(id.as_str())).count();
    let unmatched_ids: Vec<ProductId> = local_ids
        .iter()
        .filter(|id| !mapping.contains_key(id.as_str()))
        .map(|id| (*id).clone())
        .collect();

    let success_rate = if local_ids.is_empty() {
        Decimal::ZERO
    } else {
        (Decimal::from(matched_count) * Decimal::ONE_HUNDRED / Decimal::from(local_ids.len()))
            .round_dp(2)
    };

    EnrichmentSummary {
        catalog_size: mapping.len(),
        local_product_count: local_ids.len(),
        matched_count,
        success_rate,
        unmatched_ids,
    }
}
