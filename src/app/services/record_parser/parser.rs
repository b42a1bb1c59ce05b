//! Payments table reader
//!
//! Reads the whole table through the `csv` crate, drops the header row and
//! hands every data row to the field parsers.

use std::io::Read;
use tracing::{debug, warn};

use super::field_parsers::{check_column_count, parse_payment};
use super::stats::{ParseResult, ParseStats};
use crate::error::{ArchiveError, Result};

/// Parser for `date,time,sequence,amount,comment` tables
///
/// Stateless; one instance can be shared by any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordParser;

impl RecordParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse table text held in memory
    pub fn parse_str(&self, table: &str) -> Result<ParseResult> {
        self.parse_reader(table.as_bytes())
    }

    /// Parse a table from any reader
    ///
    /// Row 0 is the header and is skipped whatever it contains. The returned
    /// records keep source row order.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ParseResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        // Byte records, so a header in any encoding is skipped undecoded
        for (row, result) in csv_reader.byte_records().enumerate() {
            let record = result.map_err(|e| {
                ArchiveError::malformed("", format!("CSV parse error at row {}", row), Some(e))
            })?;

            // Skip CSV header
            if row == 0 {
                continue;
            }

            check_column_count(&record, row)?;

            match parse_payment(&record, row) {
                Ok(payment) => {
                    records.push(payment);
                    stats.record_parsed();
                }
                Err(skipped) => {
                    warn!(
                        "Invalid {} field in row {}: {}",
                        skipped.field, skipped.row, skipped.reason
                    );
                    stats.record_skipped(skipped);
                }
            }
        }

        debug!(
            "Parsed {} payments from {} rows ({} skipped)",
            stats.records_parsed, stats.total_rows, stats.rows_skipped
        );

        Ok(ParseResult { records, stats })
    }
}
