mod customers;
mod daily;
mod grouping;
mod products;
mod regions;

use rust_decimal::Decimal;

pub use customers::{customer_breakdown, CustomerStat};
pub use daily::{daily_trend, peak_sales_day, DailyStat, PeakDay};
pub use products::{
    below_average_revenue_products, low_quantity_products, product_totals, top_products,
    ProductStat, DEFAULT_LOW_QUANTITY_THRESHOLD, DEFAULT_TOP_N,
};
pub use regions::{region_breakdown, RegionStat};

use crate::models::Transaction;

/// Every analysis the report consumes, computed once per run from the
/// immutable accepted set. The analyses are independent of each other; they
/// only share their input.
#[derive(Debug, Clone)]
pub struct SalesAnalytics {
    pub total_revenue: Decimal,
    pub regions: Vec<RegionStat>,
    pub top_products: Vec<ProductStat>,
    pub low_quantity_products: Vec<ProductStat>,
    pub below_average_products: Vec<String>,
    pub customers: Vec<CustomerStat>,
    pub daily: Vec<DailyStat>,
    pub peak_day: Option<PeakDay>,
}

impl SalesAnalytics {
    pub fn compute(transactions: &[Transaction]) -> Self {
        let daily = daily_trend(transactions);
        let peak_day = peak_sales_day(&daily);

        Self {
            total_revenue: total_revenue(transactions),
            regions: region_breakdown(transactions),
            top_products: top_products(transactions, DEFAULT_TOP_N),
            low_quantity_products: low_quantity_products(
                transactions,
                DEFAULT_LOW_QUANTITY_THRESHOLD,
            ),
            below_average_products: below_average_revenue_products(transactions),
            customers: customer_breakdown(transactions),
            peak_day,
            daily,
        }
    }
}

/// Grand total revenue over the accepted set.
pub fn total_revenue(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(Transaction::amount).sum()
}

/// `100 * part / whole` at two decimals, 0 for an empty whole.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part * Decimal::ONE_HUNDRED / whole).round_dp(2)
    }
}

/// `total / count` at two decimals, 0 for an empty count.
pub(crate) fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        (total / Decimal::from(count)).round_dp(2)
    }
}
