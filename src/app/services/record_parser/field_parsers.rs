//! Field extraction for payments table rows
//!
//! Rows arrive as raw bytes. Integer columns that are not valid UTF-8 fail
//! to parse like any other junk; the comment is decoded lossily.

use csv::ByteRecord;
use std::borrow::Cow;

use super::stats::SkippedRow;
use crate::constants::{PAYMENTS_COLUMNS, columns};
use crate::error::{ArchiveError, Result};
use crate::models::{Payment, RecordField};

/// Reject a row that does not carry exactly the payments columns
pub fn check_column_count(record: &ByteRecord, row: usize) -> Result<()> {
    if record.len() != PAYMENTS_COLUMNS {
        return Err(ArchiveError::malformed(
            "",
            format!(
                "row {} has {} columns, expected {}",
                row,
                record.len(),
                PAYMENTS_COLUMNS
            ),
            None,
        ));
    }
    Ok(())
}

/// Build a payment from a row that already passed [`check_column_count`]
///
/// The first integer field that fails to parse is returned as the skip
/// reason; later fields are not inspected.
pub fn parse_payment(
    record: &ByteRecord,
    row: usize,
) -> std::result::Result<Payment, SkippedRow> {
    let date_time = format!(
        "{}{}",
        field(record, columns::DATE),
        field(record, columns::TIME)
    );
    let as_of = parse_integer(&date_time, RecordField::Timestamp, row)?;
    let sequence = parse_integer(&field(record, columns::SEQUENCE), RecordField::Sequence, row)?;
    let amount = parse_integer(&field(record, columns::AMOUNT), RecordField::Amount, row)?;

    Ok(Payment {
        as_of,
        sequence,
        amount,
        comment: field(record, columns::COMMENT).into_owned(),
    })
}

/// Parse a decimal integer field, untrimmed
pub fn parse_integer(
    value: &str,
    field: RecordField,
    row: usize,
) -> std::result::Result<i64, SkippedRow> {
    value.parse::<i64>().map_err(|e| SkippedRow {
        row,
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Column text; invalid UTF-8 sequences become U+FFFD
fn field(record: &ByteRecord, index: usize) -> Cow<'_, str> {
    String::from_utf8_lossy(record.get(index).unwrap_or_default())
}
