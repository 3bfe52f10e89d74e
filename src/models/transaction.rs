use rust_decimal::Decimal;

use crate::types::{CustomerId, ProductId, SaleDate, TransactionId};

/// Represents a single cleaned row from the sales export.
///
/// Instances only ever exist after validation: every field already satisfies
/// the schema rules (id prefixes, non-empty customer/region, positive
/// quantity and price), so downstream aggregations can consume them without
/// re-checking.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Export-wide transaction id, always `T`-prefixed.
    pub transaction_id: TransactionId,
    /// Sale date as it appears in the export. Treated as an opaque, sortable
    /// token; no calendar validation is applied.
    pub date: SaleDate,
    /// Local product id, always `P`-prefixed.
    pub product_id: ProductId,
    /// Display name with thousands-separator commas already stripped.
    pub product_name: String,
    /// Units sold, strictly positive.
    pub quantity: i64,
    /// Price per unit, strictly positive.
    pub unit_price: Decimal,
    /// Buying customer, always `C`-prefixed.
    pub customer_id: CustomerId,
    /// Sales region, never empty.
    pub region: String,
}

impl Transaction {
    /// Revenue of this record.
    ///
    /// Recomputed at every call site instead of cached so each aggregation
    /// controls its own accumulation order.
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}
