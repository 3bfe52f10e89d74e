use chrono::{DateTime, Local};

use crate::analytics::{average, SalesAnalytics};
use crate::enrichment::EnrichmentSummary;
use crate::models::Transaction;
use crate::report::format::{currency, percent};

const RULE_HEAVY: &str = "==================================================";
const RULE_LIGHT: &str = "----------------------------------------";

/// Renders the fixed-section analytics document.
///
/// Pure string assembly: all numbers arrive pre-aggregated in the analytics
/// snapshot and the enrichment summary, and rounding happens only here at
/// the presentation edge. With zero accepted records every section degrades
/// to zeroes and `N/A` instead of failing.
pub fn render_report(
    transactions: &[Transaction],
    analytics: &SalesAnalytics,
    enrichment: &EnrichmentSummary,
    generated_at: DateTime<Local>,
) -> String {
    let mut out = String::new();

    out.push_str("SALES ANALYTICS REPORT\n");
    out.push_str(RULE_HEAVY);
    out.push('\n');
    out.push_str(&format!("Generated: {}\n", generated_at.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&format!("Records Processed: {}\n\n", transactions.len()));

    render_overall_summary(&mut out, transactions, analytics);
    render_region_table(&mut out, analytics);
    render_top_products(&mut out, analytics);
    render_top_customers(&mut out, analytics);
    render_daily_trend(&mut out, analytics);
    render_product_performance(&mut out, analytics);
    render_enrichment_summary(&mut out, enrichment);

    out
}

fn render_overall_summary(out: &mut String, transactions: &[Transaction], analytics: &SalesAnalytics) {
    let avg_order_value = average(analytics.total_revenue, transactions.len());

    out.push_str("OVERALL SUMMARY\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str(&format!("Total Revenue: {}\n", currency(analytics.total_revenue, 2)));
    out.push_str(&format!("Total Transactions: {}\n", transactions.len()));
    out.push_str(&format!("Average Order Value: {}\n", currency(avg_order_value, 2)));
    out.push_str(&format!("Date Range: {}\n\n", date_range(transactions)));
}

fn render_region_table(out: &mut String, analytics: &SalesAnalytics) {
    out.push_str("REGION-WISE PERFORMANCE\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str("Region\tSales\t% of Total\tTransactions\n");

    for region in &analytics.regions {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            region.region,
            currency(region.total_sales, 0),
            percent(region.percentage),
            region.transaction_count
        ));
    }
}

fn render_top_products(out: &mut String, analytics: &SalesAnalytics) {
    out.push_str("\nTOP 5 PRODUCTS\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str("Rank\tProduct\tQuantity\tRevenue\n");

    for (rank, product) in analytics.top_products.iter().enumerate() {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            rank + 1,
            product.name,
            product.quantity,
            currency(product.revenue, 0)
        ));
    }
}

fn render_top_customers(out: &mut String, analytics: &SalesAnalytics) {
    out.push_str("\nTOP 5 CUSTOMERS\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str("Rank\tCustomer\tTotal Spent\tOrders\n");

    for (rank, customer) in analytics.customers.iter().take(5).enumerate() {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            rank + 1,
            customer.customer_id,
            currency(customer.total_spent, 0),
            customer.purchase_count
        ));
    }
}

fn render_daily_trend(out: &mut String, analytics: &SalesAnalytics) {
    out.push_str("\nDAILY SALES TREND\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str("Date\tRevenue\tTransactions\tUnique Customers\n");

    for day in &analytics.daily {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            day.date,
            currency(day.revenue, 0),
            day.transaction_count,
            day.unique_customers
        ));
    }
}

fn render_product_performance(out: &mut String, analytics: &SalesAnalytics) {
    out.push_str("\nPRODUCT PERFORMANCE ANALYSIS\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');

    match &analytics.peak_day {
        Some(peak) => out.push_str(&format!(
            "Best Selling Day: {} ({}, {} transactions)\n",
            peak.date,
            currency(peak.revenue, 0),
            peak.transaction_count
        )),
        None => out.push_str("Best Selling Day: N/A\n"),
    }

    let low_performers = if analytics.below_average_products.is_empty() {
        "None".to_string()
    } else {
        analytics.below_average_products.join(", ")
    };
    out.push_str(&format!("Low Performing Products: {low_performers}\n\n"));
}

fn render_enrichment_summary(out: &mut String, enrichment: &EnrichmentSummary) {
    out.push_str("API ENRICHMENT SUMMARY\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str(&format!("Total Products Enriched: {}\n", enrichment.catalog_size));
    out.push_str(&format!("Success Rate: {}\n", percent(enrichment.success_rate)));

    if enrichment.unmatched_ids.is_empty() {
        out.push_str("Products Not Enriched: None\n");
    } else {
        out.push_str(&format!(
            "Products Not Enriched: {} (catalog ids do not map directly to sales ProductIDs)\n",
            enrichment.unmatched_ids.len()
        ));
    }
}

fn date_range(transactions: &[Transaction]) -> String {
    let first = transactions.iter().map(|transaction| &transaction.date).min();
    let last = transactions.iter().map(|transaction| &transaction.date).max();

    match (first, last) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "N/A".to_string(),
    }
}
