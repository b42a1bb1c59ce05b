//! Parse results and row-level skip diagnostics
//!
//! Skips are returned alongside the records so callers can inspect them
//! without capturing log output.

use serde::{Deserialize, Serialize};

use crate::models::{Payment, RecordField};

/// Parsed payments with the statistics of the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Payments from well-formed rows, in source row order
    pub records: Vec<Payment>,

    pub stats: ParseStats,
}

/// One data row that was skipped because an integer field did not parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// Table row index; the header is row 0
    pub row: usize,

    /// First field that failed
    pub field: RecordField,

    /// Raw text of the failing field
    pub value: String,

    pub reason: String,
}

/// Row counters for one parsed table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Data rows seen, header excluded
    pub total_rows: usize,

    pub records_parsed: usize,

    pub rows_skipped: usize,

    pub skipped: Vec<SkippedRow>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_parsed(&mut self) {
        self.total_rows += 1;
        self.records_parsed += 1;
    }

    pub(crate) fn record_skipped(&mut self, skipped: SkippedRow) {
        self.total_rows += 1;
        self.rows_skipped += 1;
        self.skipped.push(skipped);
    }

    /// Whether every data row produced a payment
    pub fn is_clean(&self) -> bool {
        self.rows_skipped == 0
    }
}
