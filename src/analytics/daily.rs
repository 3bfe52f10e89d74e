use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::analytics::grouping::group_by;
use crate::models::Transaction;
use crate::types::{CustomerId, SaleDate};

/// One day of the sales trend.
#[derive(Debug, Clone)]
pub struct DailyStat {
    pub date: SaleDate,
    pub revenue: Decimal,
    pub transaction_count: usize,
    /// Distinct customers active that day. Never exceeds the transaction
    /// count.
    pub unique_customers: usize,
}

#[derive(Default)]
struct DayAccumulator {
    revenue: Decimal,
    count: usize,
    customers: HashSet<CustomerId>,
}

/// Revenue, volume and active customers per day, oldest day first.
pub fn daily_trend(transactions: &[Transaction]) -> Vec<DailyStat> {
    let mut days: Vec<DailyStat> = group_by(
        transactions,
        |transaction| transaction.date.clone(),
        |accumulator: &mut DayAccumulator, transaction| {
            accumulator.revenue += transaction.amount();
            accumulator.count += 1;
            accumulator.customers.insert(transaction.customer_id.clone());
        },
    )
    .into_iter()
    .map(|(date, accumulator)| DailyStat {
        date,
        revenue: accumulator.revenue,
        transaction_count: accumulator.count,
        unique_customers: accumulator.customers.len(),
    })
    .collect();

    days.sort_by(|a, b| a.date.cmp(&b.date));
    days
}

/// The single strongest day of the trend.
#[derive(Debug, Clone)]
pub struct PeakDay {
    pub date: SaleDate,
    pub revenue: Decimal,
    pub transaction_count: usize,
}

/// Scans the (date-ascending) trend for the day with strictly maximum
/// revenue. Earlier dates win ties, and a trend that earned nothing at all
/// has no peak.
pub fn peak_sales_day(trend: &[DailyStat]) -> Option<PeakDay> {
    let mut peak: Option<&DailyStat> = None;

    for day in trend {
        if day.revenue > peak.map_or(Decimal::ZERO, |current| current.revenue) {
            peak = Some(day);
        }
    }

    peak.map(|day| PeakDay {
        date: day.date.clone(),
        revenue: day.revenue,
        transaction_count: day.transaction_count,
    })
}
