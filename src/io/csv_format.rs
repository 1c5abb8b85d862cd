//! CSV format handling for stored ledger entries
//!
//! This module centralizes all store format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Field-count normalisation for raw rows
//! - Conversion from CSV records to domain types
//! - Transaction serialization
//!
//! The format is deliberately unquoted: five comma-separated fields per line,
//! with delimiter and line-break characters replaced by spaces on write so the
//! field count never changes.
//!
//! All functions are pure (no file access) for easy testing.

use crate::types::{parse_amount, round_amount, LedgerError, Transaction, TransactionType};
use chrono::NaiveDate;
use csv::{QuoteStyle, StringRecord, WriterBuilder};
use serde::Deserialize;
use std::io::Write;

/// Column names of the store header, in order
pub const HEADER: [&str; 5] = ["date", "type", "category", "amount", "note"];

/// Number of fields in a complete row
pub const FIELD_COUNT: usize = HEADER.len();

/// Date format used in the store
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV record structure for deserialization
///
/// Matches the store columns: date, type, category, amount, note.
/// All fields are read as text and validated in [`convert_csv_record`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub date: String,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

/// Bring a raw row to exactly five trimmed fields
///
/// Rows with fewer than five fields return `None` and are meant to be skipped.
/// Rows with more keep the first four fields and join the rest back into the
/// note, so a hand-edited note containing commas survives byte for byte.
/// Only the ends of each resulting field are trimmed.
pub fn normalize_record(record: &StringRecord) -> Option<StringRecord> {
    if record.len() < FIELD_COUNT {
        return None;
    }

    let mut normalized: StringRecord = record
        .iter()
        .take(FIELD_COUNT - 1)
        .map(str::trim)
        .collect();
    let note = record
        .iter()
        .skip(FIELD_COUNT - 1)
        .collect::<Vec<_>>()
        .join(",");
    normalized.push_field(note.trim());
    Some(normalized)
}

/// Rebuild the textual content of a row for error messages
pub fn record_content(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}

/// Convert a CsvRecord to a Transaction
///
/// This function:
/// - Parses the date as `YYYY-MM-DD`
/// - Parses the type (case-insensitive)
/// - Parses the amount and rounds it half-up to two decimals
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
/// * `line` - Line number in the store, for error context
///
/// # Returns
///
/// Result containing either:
/// - Ok(Transaction) - Successfully converted record
/// - Err(LedgerError::ParseError) - Which field was corrupt, with the line content
pub fn convert_csv_record(
    csv_record: CsvRecord,
    line: Option<u64>,
) -> Result<Transaction, LedgerError> {
    let content = || {
        [
            csv_record.date.as_str(),
            csv_record.tx_type.as_str(),
            csv_record.category.as_str(),
            csv_record.amount.as_str(),
            csv_record.note.as_str(),
        ]
        .join(",")
    };

    let date = NaiveDate::parse_from_str(&csv_record.date, DATE_FORMAT).map_err(|e| {
        LedgerError::parse(
            line,
            &content(),
            format!("invalid date '{}': {}", csv_record.date, e),
        )
    })?;

    let tx_type = csv_record
        .tx_type
        .parse::<TransactionType>()
        .map_err(|value| {
            LedgerError::parse(line, &content(), format!("invalid type '{}'", value))
        })?;

    let amount = parse_amount(&csv_record.amount).ok_or_else(|| {
        LedgerError::parse(
            line,
            &content(),
            format!("invalid amount '{}'", csv_record.amount),
        )
    })?;

    Ok(Transaction {
        date,
        tx_type,
        category: csv_record.category,
        amount: round_amount(amount),
        note: csv_record.note,
    })
}

/// Replace characters that would change the field or line count
fn sanitize_field(value: &str) -> String {
    value.replace([',', '\n', '\r'], " ")
}

/// Serialize a transaction into its five store fields
///
/// Total for any transaction: the date is `YYYY-MM-DD`, the amount carries
/// exactly two decimals, and commas or line breaks in text fields become
/// spaces.
pub fn transaction_to_record(tx: &Transaction) -> [String; FIELD_COUNT] {
    [
        tx.date.format(DATE_FORMAT).to_string(),
        tx.tx_type.to_string(),
        sanitize_field(&tx.category),
        format!("{:.2}", round_amount(tx.amount)),
        sanitize_field(&tx.note),
    ]
}

/// Serialize a transaction as one store line, without the terminator
pub fn to_csv_line(tx: &Transaction) -> String {
    transaction_to_record(tx).join(",")
}

fn store_writer(output: &mut dyn Write) -> csv::Writer<&mut dyn Write> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(output)
}

/// Write the store header line
pub fn write_header(output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = store_writer(output);
    writer.write_record(HEADER)?;
    writer.flush()?;
    Ok(())
}

/// Write one transaction as a newline-terminated store line
///
/// The record is buffered and flushed in a single write.
pub fn write_transaction(tx: &Transaction, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = store_writer(output);
    writer.write_record(&transaction_to_record(tx))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    fn csv_record(date: &str, tx_type: &str, amount: &str) -> CsvRecord {
        CsvRecord {
            date: date.to_string(),
            tx_type: tx_type.to_string(),
            category: "Food".to_string(),
            amount: amount.to_string(),
            note: "Lunch".to_string(),
        }
    }

    fn sample(note: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 9, 5).unwrap(),
            TransactionType::Expense,
            "Groceries",
            Decimal::from_str("85.3").unwrap(),
            note,
        )
    }

    #[rstest]
    #[case::empty(&[""])]
    #[case::two_fields(&["2025-09-05", "expense"])]
    #[case::four_fields(&["2025-09-05", "expense", "Food", "1.00"])]
    fn test_normalize_record_skips_short_rows(#[case] fields: &[&str]) {
        assert_eq!(normalize_record(&record(fields)), None);
    }

    #[test]
    fn test_normalize_record_keeps_exact_rows() {
        let row = record(&["2025-09-05", "expense", "Food", "1.00", "note"]);
        assert_eq!(normalize_record(&row), Some(row));
    }

    #[rstest]
    #[case::bare(&["a", "b", "c"], "a,b,c")]
    #[case::spaced(&["bread", " milk", " eggs"], "bread, milk, eggs")]
    #[case::padded_ends(&["  bread", " milk  "], "bread, milk")]
    fn test_normalize_record_joins_extra_fields_into_note(
        #[case] note_fields: &[&str],
        #[case] expected_note: &str,
    ) {
        let mut fields = vec!["2025-09-05", "expense", "Food", "1.00"];
        fields.extend_from_slice(note_fields);

        let normalized = normalize_record(&record(&fields)).unwrap();

        assert_eq!(normalized.len(), FIELD_COUNT);
        assert_eq!(&normalized[4], expected_note);
    }

    #[test]
    fn test_normalize_record_trims_field_ends() {
        let row = record(&[" 2025-09-05 ", " expense", "Food ", " 1.00 ", "  a  b  "]);
        let normalized = normalize_record(&row).unwrap();
        assert_eq!(
            normalized,
            record(&["2025-09-05", "expense", "Food", "1.00", "a  b"])
        );
    }

    #[rstest]
    #[case::expense("2025-09-05", "expense", "85.30", TransactionType::Expense, "85.30")]
    #[case::income("2025-09-05", "income", "2500", TransactionType::Income, "2500.00")]
    #[case::upper_type("2025-09-05", "INCOME", "1", TransactionType::Income, "1.00")]
    #[case::rounds_on_load("2025-09-05", "expense", "12.505", TransactionType::Expense, "12.51")]
    #[case::negative_kept("2025-09-05", "expense", "-4.5", TransactionType::Expense, "-4.50")]
    fn test_convert_csv_record_valid(
        #[case] date: &str,
        #[case] tx_type: &str,
        #[case] amount: &str,
        #[case] expected_type: TransactionType,
        #[case] expected_amount: &str,
    ) {
        let tx = convert_csv_record(csv_record(date, tx_type, amount), Some(2)).unwrap();
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 9, 5).unwrap());
        assert_eq!(tx.tx_type, expected_type);
        assert_eq!(tx.category, "Food");
        assert_eq!(tx.amount.to_string(), expected_amount);
        assert_eq!(tx.note, "Lunch");
    }

    #[rstest]
    #[case::bad_date("2025-13-45", "expense", "1.00", "invalid date")]
    #[case::not_a_date("yesterday", "expense", "1.00", "invalid date")]
    #[case::bad_amount("2025-09-05", "expense", "lots", "invalid amount")]
    #[case::empty_amount("2025-09-05", "expense", "", "invalid amount")]
    #[case::bad_type("2025-09-05", "refund", "1.00", "invalid type")]
    fn test_convert_csv_record_errors(
        #[case] date: &str,
        #[case] tx_type: &str,
        #[case] amount: &str,
        #[case] expected_error: &str,
    ) {
        let err = convert_csv_record(csv_record(date, tx_type, amount), Some(7)).unwrap_err();
        match &err {
            LedgerError::ParseError {
                line,
                content,
                message,
            } => {
                assert_eq!(*line, Some(7));
                assert!(content.starts_with(date));
                assert!(message.contains(expected_error), "message: {}", message);
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[rstest]
    #[case::empty_note("", "2025-09-05,expense,Groceries,85.30,")]
    #[case::plain_note("Weekly shop", "2025-09-05,expense,Groceries,85.30,Weekly shop")]
    #[case::comma_note("milk, eggs", "2025-09-05,expense,Groceries,85.30,milk  eggs")]
    #[case::newline_note("a\nb", "2025-09-05,expense,Groceries,85.30,a b")]
    fn test_to_csv_line(#[case] note: &str, #[case] expected: &str) {
        assert_eq!(to_csv_line(&sample(note)), expected);
    }

    #[test]
    fn test_to_csv_line_sanitizes_category() {
        let mut tx = sample("");
        tx.category = "Food,Drink".to_string();
        assert_eq!(to_csv_line(&tx), "2025-09-05,expense,Food Drink,85.30,");
    }

    #[test]
    fn test_write_header() {
        let mut output = Vec::new();
        write_header(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "date,type,category,amount,note\n"
        );
    }

    #[rstest]
    #[case::empty_note("")]
    #[case::quoted_note("said \"hi\"")]
    #[case::comma_note("a,b")]
    fn test_write_transaction_matches_line(#[case] note: &str) {
        let tx = sample(note);
        let mut output = Vec::new();
        write_transaction(&tx, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{}\n", to_csv_line(&tx))
        );
    }

    #[test]
    fn test_serialize_then_parse_is_identity() {
        let original = sample("Weekly shop");
        let fields = transaction_to_record(&original);
        let row: StringRecord = fields.iter().map(String::as_str).collect();
        let parsed_record: CsvRecord = row.deserialize(None).unwrap();
        let parsed = convert_csv_record(parsed_record, None).unwrap();
        assert_eq!(parsed, original);
    }
}
