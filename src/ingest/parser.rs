use std::str::FromStr;

use csv::StringRecord;
use rust_decimal::Decimal;

use crate::models::RecordError;

pub const FIELD_COUNT: usize = 8;

/// The eight raw fields of one data line, mapped by position.
///
/// Still untyped and unvalidated apart from the field count; the validator
/// decides what becomes a `Transaction`.
#[derive(Debug)]
pub struct RawRecord {
    pub transaction_id: String,
    pub date: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: String,
    pub unit_price: String,
    pub customer_id: String,
    pub region: String,
}

impl RawRecord {
    pub fn from_record(record: &StringRecord) -> Result<Self, RecordError> {
        if record.len() != FIELD_COUNT {
            return Err(RecordError::WrongFieldCount {
                expected: FIELD_COUNT,
                found: record.len(),
            });
        }

        Ok(Self {
            transaction_id: record[0].to_string(),
            date: record[1].to_string(),
            product_id: record[2].to_string(),
            // Source amounts use commas as thousands separators; a comma left
            // in the name would corrupt the tabular output built from it
            product_name: record[3].replace(',', ""),
            quantity: record[4].to_string(),
            unit_price: record[5].to_string(),
            customer_id: record[6].to_string(),
            region: record[7].to_string(),
        })
    }
}

/// Parses a quantity field, tolerating thousands-separator commas.
pub fn parse_quantity(value: &str) -> Result<i64, RecordError> {
    value.replace(',', "").parse().map_err(|_| RecordError::InvalidNumber {
        field: "Quantity",
        value: value.to_string(),
    })
}

/// Parses a unit-price field, tolerating thousands-separator commas.
pub fn parse_unit_price(value: &str) -> Result<Decimal, RecordError> {
    Decimal::from_str(&value.replace(',', "")).map_err(|_| RecordError::InvalidNumber {
        field: "UnitPrice",
        value: value.to_string(),
    })
}
