use thiserror::Error;

/// Why a single raw record was rejected during cleaning.
///
/// These are data, not failures: the validator counts each variant in its
/// own bucket and moves on. Nothing here ever aborts a run.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Record has {found} fields, expected {expected}")]
    WrongFieldCount { expected: usize, found: usize },
    #[error("TransactionID [{value}] does not start with 'T'")]
    InvalidTransactionId { value: String },
    #[error("Required field [{field}] is empty")]
    MissingField { field: &'static str },
    #[error("Field [{field}] has an unparseable value [{value}]")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Field [{field}] must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("ProductID [{value}] does not start with 'P'")]
    InvalidProductId { value: String },
    #[error("CustomerID [{value}] does not start with 'C'")]
    InvalidCustomerId { value: String },
}
