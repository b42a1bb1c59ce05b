//! Data models for the payment archive
//!
//! [`Payment`] is the external representation of one row of a record file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single payment parsed from a well-formed data row
///
/// `as_of` is the date and time columns concatenated and read as one decimal
/// integer, e.g. `20220717` + `090000` gives `20220717090000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "asOf")]
    pub as_of: i64,

    /// Unique within one source file (assumed, not enforced)
    pub sequence: i64,

    /// Raw units, no currency semantics
    pub amount: i64,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Payment {
    pub fn new(as_of: i64, sequence: i64, amount: i64, comment: impl Into<String>) -> Self {
        Self {
            as_of,
            sequence,
            amount,
            comment: comment.into(),
        }
    }
}

/// Integer fields of a data row that can fail to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    /// Concatenated date and time columns
    Timestamp,
    Sequence,
    Amount,
}

impl RecordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Timestamp => "date/time",
            RecordField::Sequence => "sequence",
            RecordField::Amount => "amount",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
