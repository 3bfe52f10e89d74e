use rust_decimal::Decimal;

use crate::analytics::{grouping::group_by, percent_of};
use crate::models::Transaction;

/// Sales performance of one region.
#[derive(Debug, Clone)]
pub struct RegionStat {
    pub region: String,
    pub total_sales: Decimal,
    pub transaction_count: usize,
    /// Share of overall revenue, rounded to two decimals.
    pub percentage: Decimal,
}

#[derive(Default)]
struct RegionAccumulator {
    total: Decimal,
    count: usize,
}

/// Region totals with share-of-revenue percentages, largest region first.
///
/// Shares need the grand total, so this is two passes over the groups: fold
/// the totals first, derive each percentage only once the grand total is
/// known. Ties keep discovery order.
pub fn region_breakdown(transactions: &[Transaction]) -> Vec<RegionStat> {
    let groups = group_by(
        transactions,
        |transaction| transaction.region.clone(),
        |accumulator: &mut RegionAccumulator, transaction| {
            accumulator.total += transaction.amount();
            accumulator.count += 1;
        },
    );

    let grand_total: Decimal = groups.iter().map(|(_, accumulator)| accumulator.total).sum();

    let mut stats: Vec<RegionStat> = groups
        .into_iter()
        .map(|(region, accumulator)| RegionStat {
            region,
            total_sales: accumulator.total,
            transaction_count: accumulator.count,
            percentage: percent_of(accumulator.total, grand_total),
        })
        .collect();

    stats.sort_by(|a, b| b.total_sales.cmp(&a.total_sales));
    stats
}
