use rust_decimal::Decimal;

use crate::analytics::grouping::group_by;
use crate::models::Transaction;

pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_LOW_QUANTITY_THRESHOLD: i64 = 10;

/// Aggregated sales of one product.
#[derive(Debug, Clone)]
pub struct ProductStat {
    pub name: String,
    pub quantity: i64,
    pub revenue: Decimal,
}

#[derive(Default)]
struct ProductAccumulator {
    quantity: i64,
    revenue: Decimal,
}

/// Per-product totals in discovery order.
///
/// Both ranking analyses and the below-average scan derive from this one
/// grouping, so a product always reports identical totals no matter which
/// analysis lists it.
pub fn product_totals(transactions: &[Transaction]) -> Vec<ProductStat> {
    group_by(
        transactions,
        |transaction| transaction.product_name.clone(),
        |accumulator: &mut ProductAccumulator, transaction| {
            accumulator.quantity += transaction.quantity;
            accumulator.revenue += transaction.amount();
        },
    )
    .into_iter()
    .map(|(name, accumulator)| ProductStat {
        name,
        quantity: accumulator.quantity,
        revenue: accumulator.revenue,
    })
    .collect()
}

/// The `n` best sellers, ranked by units moved. Revenue rides along for
/// display but is never the ranking key.
pub fn top_products(transactions: &[Transaction], n: usize) -> Vec<ProductStat> {
    let mut totals = product_totals(transactions);
    totals.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    totals.truncate(n);
    totals
}

/// Products that moved strictly fewer units than `threshold`, slowest
/// first. Not truncated.
pub fn low_quantity_products(transactions: &[Transaction], threshold: i64) -> Vec<ProductStat> {
    let mut slow: Vec<ProductStat> = product_totals(transactions)
        .into_iter()
        .filter(|product| product.quantity < threshold)
        .collect();

    slow.sort_by(|a, b| a.quantity.cmp(&b.quantity));
    slow
}

/// Products earning below the mean per-product revenue.
///
/// A different question than `low_quantity_products`: that one flags slow
/// movers by units, this one flags weak earners relative to the field. The
/// two stay separate operations on purpose.
pub fn below_average_revenue_products(transactions: &[Transaction]) -> Vec<String> {
    let totals = product_totals(transactions);

    if totals.is_empty() {
        return Vec::new();
    }

    let revenue_sum: Decimal = totals.iter().map(|product| product.revenue).sum();
    let mean = revenue_sum / Decimal::from(totals.len());

    totals
        .into_iter()
        .filter(|product| product.revenue < mean)
        .map(|product| product.name)
        .collect()
}
