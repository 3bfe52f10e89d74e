use super::parser::{parse_quantity, parse_unit_price, RawRecord};
use super::reader::{decode, load_source};
use super::validator::{clean_and_validate, ValidationOptions};

use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use csv::StringRecord;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

const HEADER: &str = "TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region";

fn sample(lines: &[&str]) -> String {
    let mut source = String::from(HEADER);

    for line in lines {
        source.push('\n');
        source.push_str(line);
    }

    source
}

#[test]
fn test_parser_rejects_wrong_field_count() {
    let record = StringRecord::from(vec!["T1", "2024-01-01", "P1"]);

    let result = RawRecord::from_record(&record);

    assert!(matches!(
        result,
        Err(crate::models::RecordError::WrongFieldCount { expected: 8, found: 3 })
    ));
}

#[test]
fn test_parser_strips_commas_from_product_name() -> Result<()> {
    let record = StringRecord::from(vec![
        "T1", "2024-01-01", "P1", "Widget, Deluxe", "3", "100.00", "C1", "North",
    ]);

    let raw = RawRecord::from_record(&record)?;

    assert_eq!(raw.product_name, "Widget Deluxe");

    Ok(())
}

#[test]
fn test_numeric_parsers_strip_thousands_separators() -> Result<()> {
    assert_eq!(parse_quantity("1,200")?, 1200);
    assert_eq!(parse_unit_price("1,299.50")?, Decimal::from_str("1299.50")?);

    Ok(())
}

#[test]
fn test_numeric_parsers_reject_garbage() {
    assert!(parse_quantity("three").is_err());
    assert!(parse_quantity("").is_err());
    assert!(parse_unit_price("₹100").is_err());
}

#[test]
fn test_validator_accepts_well_formed_records() -> Result<()> {
    let source = sample(&[
        "T1|2024-01-01|P1|Widget|3|100.00|C1|North",
        "T2|2024-01-01|P2|Gadget|1|50.00|C2|South",
    ]);

    let outcome = clean_and_validate(&source, &ValidationOptions::default());

    assert_eq!(outcome.report.total_input, 2);
    assert_eq!(outcome.report.invalid_count(), 0);
    assert_eq!(outcome.report.final_count, 2);

    let first = &outcome.transactions[0];
    assert_eq!(first.quantity, 3);
    assert_eq!(first.unit_price, Decimal::from_str("100.00")?);
    assert_eq!(first.amount(), Decimal::from_str("300.00")?);

    Ok(())
}

#[test]
fn test_validator_discards_header_and_blank_lines() {
    let source = sample(&[
        "",
        "T1|2024-01-01|P1|Widget|3|100.00|C1|North",
        "   ",
        "T2|2024-01-01|P2|Gadget|1|50.00|C2|South",
        "",
    ]);

    let outcome = clean_and_validate(&source, &ValidationOptions::default());

    assert_eq!(outcome.report.total_input, 2);
    assert_eq!(outcome.report.final_count, 2);
}

#[test]
fn test_validator_counts_each_rule_in_its_own_bucket() {
    let source = sample(&[
        "T1|2024-01-01|P1|Short line",
        "X2|2024-01-01|P2|Gadget|1|50.00|C2|South",
        "T3|2024-01-01|P3|Gadget|1|50.00||South",
        "T4|2024-01-01|P4|Gadget|one|50.00|C4|South",
        "T5|2024-01-01|P5|Gadget|0|50.00|C5|South",
        "T6|2024-01-01|X6|Gadget|1|50.00|C6|South",
        "T7|2024-01-01|P7|Gadget|1|50.00|X7|South",
        "T8|2024-01-01|P8|Gadget|2|25.00|C8|South",
    ]);

    let outcome = clean_and_validate(&source, &ValidationOptions::default());
    let rejections = outcome.report.rejections;

    assert_eq!(rejections.wrong_field_count, 1);
    assert_eq!(rejections.invalid_transaction_id, 1);
    assert_eq!(rejections.missing_field, 1);
    assert_eq!(rejections.invalid_number, 1);
    assert_eq!(rejections.non_positive, 1);
    assert_eq!(rejections.invalid_product_id, 1);
    assert_eq!(rejections.invalid_customer_id, 1);
    assert_eq!(outcome.report.invalid_count(), 7);
    assert_eq!(outcome.report.final_count, 1);
}

#[test]
fn test_validator_short_circuits_on_first_failing_rule() {
    // Bad transaction id AND unparseable quantity: only the id bucket moves
    let source = sample(&["X1|2024-01-01|P1|Widget|abc|100.00|C1|North"]);

    let outcome = clean_and_validate(&source, &ValidationOptions::default());
    let rejections = outcome.report.rejections;

    assert_eq!(rejections.invalid_transaction_id, 1);
    assert_eq!(rejections.invalid_number, 0);
    assert_eq!(outcome.report.invalid_count(), 1);
}

#[test]
fn test_empty_quantity_is_rejected_not_fatal() {
    let source = sample(&[
        "T1|2024-01-01|P1|Widget|3|100.00|C1|North",
        "T3|2024-01-02|P3|Bad||10|C3|East",
    ]);

    let outcome = clean_and_validate(&source, &ValidationOptions::default());

    assert_eq!(outcome.report.invalid_count(), 1);
    assert_eq!(outcome.report.rejections.invalid_number, 1);
    assert_eq!(outcome.report.final_count, 1);
    assert!(outcome.transactions.iter().all(|t| t.transaction_id != "T3"));
}

#[test]
fn test_validator_rejects_non_positive_price() {
    let source = sample(&["T1|2024-01-01|P1|Widget|3|0.00|C1|North"]);

    let outcome = clean_and_validate(&source, &ValidationOptions::default());

    assert_eq!(outcome.report.rejections.non_positive, 1);
    assert_eq!(outcome.report.final_count, 0);
}

#[test]
fn test_region_filter_counts_apart_from_invalid() {
    let source = sample(&[
        "T1|2024-01-01|P1|Widget|3|100.00|C1|North",
        "T2|2024-01-01|P2|Gadget|1|50.00|C2|South",
        "bad line",
    ]);

    let options = ValidationOptions {
        region: Some("North".to_string()),
        ..ValidationOptions::default()
    };
    let outcome = clean_and_validate(&source, &options);

    assert_eq!(outcome.report.total_input, 3);
    assert_eq!(outcome.report.invalid_count(), 1);
    assert_eq!(outcome.report.filtered_by_region, 1);
    assert_eq!(outcome.report.final_count, 1);
    assert_eq!(outcome.transactions[0].region, "North");
}

#[test]
fn test_amount_range_filter_is_inclusive() -> Result<()> {
    let source = sample(&[
        "T1|2024-01-01|P1|Widget|3|100.00|C1|North",
        "T2|2024-01-01|P2|Gadget|1|50.00|C2|South",
        "T3|2024-01-01|P3|Gizmo|1|500.00|C3|East",
    ]);

    let options = ValidationOptions {
        min_amount: Some(Decimal::from_str("50.00")?),
        max_amount: Some(Decimal::from_str("300.00")?),
        ..ValidationOptions::default()
    };
    let outcome = clean_and_validate(&source, &options);

    assert_eq!(outcome.report.filtered_by_amount, 1);
    assert_eq!(outcome.report.final_count, 2);

    Ok(())
}

#[test]
fn test_accounting_identity_holds() {
    let source = sample(&[
        "T1|2024-01-01|P1|Widget|3|100.00|C1|North",
        "",
        "not enough fields",
        "T2|2024-01-01|P2|Gadget|-1|50.00|C2|South",
        "T3|2024-01-01|P3|Gizmo|1|500.00|C3|East",
    ]);

    let options = ValidationOptions {
        region: Some("North".to_string()),
        ..ValidationOptions::default()
    };
    let outcome = clean_and_validate(&source, &options);
    let report = outcome.report;

    assert_eq!(
        report.final_count
            + report.invalid_count()
            + report.filtered_by_region
            + report.filtered_by_amount,
        report.total_input
    );
}

#[test]
fn test_empty_source_yields_empty_outcome() {
    let outcome = clean_and_validate("", &ValidationOptions::default());

    assert_eq!(outcome.report.total_input, 0);
    assert_eq!(outcome.report.final_count, 0);
    assert!(outcome.transactions.is_empty());
}

#[test]
fn test_utf8_source_decodes_verbatim() {
    assert_eq!(decode(b"T1|North".to_vec()), "T1|North");
}

#[test]
fn test_invalid_utf8_falls_back_to_latin1() {
    // 0xE9 is 'é' in Latin-1 but an invalid standalone byte in UTF-8
    assert_eq!(decode(vec![b'C', b'a', b'f', 0xE9]), "Café");
}

#[test]
fn test_load_source_reads_file_contents() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{HEADER}")?;

    let source = load_source(file.path())?;

    assert!(source.starts_with("TransactionID|"));

    Ok(())
}

#[test]
fn test_load_source_fails_for_missing_file() {
    assert!(load_source(Path::new("missing_sales_export.txt")).is_err());
}
