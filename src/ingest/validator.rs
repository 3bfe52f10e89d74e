use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::ingest::parser::{self, RawRecord};
use crate::models::{RecordError, Transaction};

/// Optional post-validation filters. Records dropped here are counted apart
/// from invalid ones: they were well-formed, just out of scope for the run.
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    /// Keep only transactions from this region (exact match).
    pub region: Option<String>,
    /// Keep only transactions with `amount >= min_amount`.
    pub min_amount: Option<Decimal>,
    /// Keep only transactions with `amount <= max_amount`.
    pub max_amount: Option<Decimal>,
}

/// Per-rule rejection buckets. One record increments at most one bucket,
/// the first rule it fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    pub wrong_field_count: usize,
    pub invalid_transaction_id: usize,
    pub missing_field: usize,
    pub invalid_number: usize,
    pub non_positive: usize,
    pub invalid_product_id: usize,
    pub invalid_customer_id: usize,
}

impl RejectionCounts {
    fn record(&mut self, error: &RecordError) {
        match error {
            RecordError::WrongFieldCount { .. } => self.wrong_field_count += 1,
            RecordError::InvalidTransactionId { .. } => self.invalid_transaction_id += 1,
            RecordError::MissingField { .. } => self.missing_field += 1,
            RecordError::InvalidNumber { .. } => self.invalid_number += 1,
            RecordError::NonPositive { .. } => self.non_positive += 1,
            RecordError::InvalidProductId { .. } => self.invalid_product_id += 1,
            RecordError::InvalidCustomerId { .. } => self.invalid_customer_id += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.wrong_field_count
            + self.invalid_transaction_id
            + self.missing_field
            + self.invalid_number
            + self.non_positive
            + self.invalid_product_id
            + self.invalid_customer_id
    }
}

/// Outcome bookkeeping for one cleaning pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationReport {
    /// Data records seen, header and blank lines excluded.
    pub total_input: usize,
    pub rejections: RejectionCounts,
    pub filtered_by_region: usize,
    pub filtered_by_amount: usize,
    pub final_count: usize,
}

impl ValidationReport {
    pub fn invalid_count(&self) -> usize {
        self.rejections.total()
    }
}

#[derive(Debug, Default)]
pub struct ValidationOutcome {
    pub transactions: Vec<Transaction>,
    pub report: ValidationReport,
}

/// Cleans one raw export into the accepted transaction set.
///
/// The first line is always a header and is dropped by position, never by
/// content; blank lines are skipped. Every surviving line either becomes a
/// `Transaction` or increments exactly one rejection counter. Bad records
/// are data here, not errors: this function has no failure mode.
pub fn clean_and_validate(source: &str, options: &ValidationOptions) -> ValidationOutcome {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(true)
        .trim(Trim::All)
        .quoting(false)
        .flexible(true)
        .from_reader(source.as_bytes());

    let mut outcome = ValidationOutcome::default();

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                warn!("Unreadable line skipped: {error}");
                continue;
            }
        };

        // A whitespace-only line collapses to a single empty field once
        // trimmed; treat it like the blank line it was
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        outcome.report.total_input += 1;

        match validate_record(&record) {
            Ok(transaction) => {
                if let Some(region) = &options.region {
                    if transaction.region != *region {
                        outcome.report.filtered_by_region += 1;
                        continue;
                    }
                }

                if !within_amount_range(transaction.amount(), options) {
                    outcome.report.filtered_by_amount += 1;
                    continue;
                }

                outcome.transactions.push(transaction);
            }
            Err(error) => {
                outcome.report.rejections.record(&error);
                debug!("Rejected record: {error}");
            }
        }
    }

    outcome.report.final_count = outcome.transactions.len();
    outcome
}

/// Applies the schema rules in order, stopping at the first failure so each
/// rejected record lands in exactly one bucket.
fn validate_record(record: &StringRecord) -> Result<Transaction, RecordError> {
    let raw = RawRecord::from_record(record)?;

    if !raw.transaction_id.starts_with('T') {
        return Err(RecordError::InvalidTransactionId { value: raw.transaction_id });
    }

    if raw.customer_id.is_empty() {
        return Err(RecordError::MissingField { field: "CustomerID" });
    }

    if raw.region.is_empty() {
        return Err(RecordError::MissingField { field: "Region" });
    }

    let quantity = parser::parse_quantity(&raw.quantity)?;
    let unit_price = parser::parse_unit_price(&raw.unit_price)?;

    if quantity <= 0 {
        return Err(RecordError::NonPositive { field: "Quantity" });
    }

    if unit_price <= Decimal::ZERO {
        return Err(RecordError::NonPositive { field: "UnitPrice" });
    }

    if !raw.product_id.starts_with('P') {
        return Err(RecordError::InvalidProductId { value: raw.product_id });
    }

    if !raw.customer_id.starts_with('C') {
        return Err(RecordError::InvalidCustomerId { value: raw.customer_id });
    }

    Ok(Transaction {
        transaction_id: raw.transaction_id,
        date: raw.date,
        product_id: raw.product_id,
        product_name: raw.product_name,
        quantity,
        unit_price,
        customer_id: raw.customer_id,
        region: raw.region,
    })
}

fn within_amount_range(amount: Decimal, options: &ValidationOptions) -> bool {
    if let Some(min_amount) = options.min_amount {
        if amount < min_amount {
            return false;
        }
    }

    if let Some(max_amount) = options.max_amount {
        if amount > max_amount {
            return false;
        }
    }

    true
}
