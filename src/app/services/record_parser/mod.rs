//! Payments table parser
//!
//! Turns the comma-separated content of a record file into [`Payment`]s.
//!
//! ## Layout
//!
//! ```text
//! date,time,sequence,amount,comment      <- row 0, always skipped
//! 20220717,090000,211,500,payment2
//! 20220717,090000,212,600,
//! ```
//!
//! ## Failure policy
//!
//! - A row whose date/time, sequence or amount does not parse as an integer
//!   is skipped and recorded in [`ParseStats`]; parsing continues.
//! - A row with the wrong number of columns, or content the CSV reader
//!   cannot tokenize, aborts the whole parse with a `Malformed` error.
//!
//! Components:
//! - [`parser`] - table reading and row dispatch
//! - [`field_parsers`] - per-row field extraction
//! - [`stats`] - parse results and skip diagnostics
//!
//! ```rust
//! use payment_archive::app::services::record_parser::RecordParser;
//!
//! let table = "date,time,sequence,amount,comment\n20220717,090000,211,500,payment2\n";
//! let result = RecordParser::new().parse_str(table).unwrap();
//! assert_eq!(result.records[0].as_of, 20220717090000);
//! ```
//!
//! [`Payment`]: crate::models::Payment

pub mod field_parsers;
pub mod parser;
pub mod stats;

#[cfg(test)]
mod tests;

pub use parser::RecordParser;
pub use stats::{ParseResult, ParseStats, SkippedRow};
