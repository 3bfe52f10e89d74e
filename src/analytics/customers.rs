use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::analytics::{average, grouping::group_by};
use crate::models::Transaction;
use crate::types::CustomerId;

/// Purchase profile of one customer.
#[derive(Debug, Clone)]
pub struct CustomerStat {
    pub customer_id: CustomerId,
    pub total_spent: Decimal,
    pub purchase_count: usize,
    /// Distinct product names this customer bought.
    pub products: BTreeSet<String>,
    /// `total_spent / purchase_count`, rounded to two decimals.
    pub avg_order_value: Decimal,
}

#[derive(Default)]
struct CustomerAccumulator {
    spent: Decimal,
    orders: usize,
    products: BTreeSet<String>,
}

/// Spend, order count and product variety per customer, biggest spender
/// first.
pub fn customer_breakdown(transactions: &[Transaction]) -> Vec<CustomerStat> {
    let groups = group_by(
        transactions,
        |transaction| transaction.customer_id.clone(),
        |accumulator: &mut CustomerAccumulator, transaction| {
            accumulator.spent += transaction.amount();
            accumulator.orders += 1;
            accumulator.products.insert(transaction.product_name.clone());
        },
    );

    let mut stats: Vec<CustomerStat> = groups
        .into_iter()
        .map(|(customer_id, accumulator)| CustomerStat {
            customer_id,
            avg_order_value: average(accumulator.spent, accumulator.orders),
            total_spent: accumulator.spent,
            purchase_count: accumulator.orders,
            products: accumulator.products,
        })
        .collect();

    stats.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    stats
}
