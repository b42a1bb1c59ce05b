//! Naming-convention checks for day directories and record files
//!
//! Day directories are named `YYYYMMDD` and must be a real calendar date.
//! Record files are named `HHMMSS.payments` and must be a real time of day.
//! Both checks are pure and report a [`NameError`] naming the offending entry;
//! callers treat a rejection as a skip, never as a failure.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::constants::{DAY_NAME_LEN, RECORD_FILE_SUFFIX, TIME_PREFIX_LEN};

/// Why a directory or file name does not follow the archive layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("invalid name '{name}': expected {expected} characters, found {found}")]
    WrongLength {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid name '{name}': expected only digits in '{field}'")]
    NonDigit { name: String, field: String },

    #[error("invalid name '{name}': missing '{suffix}' suffix")]
    MissingSuffix { name: String, suffix: &'static str },

    #[error("invalid name '{name}': {reason}")]
    OutOfRange { name: String, reason: String },
}

impl NameError {
    /// The rejected name
    pub fn name(&self) -> &str {
        match self {
            NameError::WrongLength { name, .. }
            | NameError::NonDigit { name, .. }
            | NameError::MissingSuffix { name, .. }
            | NameError::OutOfRange { name, .. } => name,
        }
    }
}

/// Validate a day directory name against `YYYYMMDD`
///
/// Returns the calendar date the name encodes.
pub fn validate_day_name(name: &str) -> Result<NaiveDate, NameError> {
    let digits = exact_digits(name, name, DAY_NAME_LEN, DAY_NAME_LEN)?;

    let year = digits_value(&digits[0..4]) as i32;
    let month = digits_value(&digits[4..6]);
    let day = digits_value(&digits[6..8]);

    if !(1..=12).contains(&month) {
        return Err(out_of_range(name, format!("month {:02} is not 01-12", month)));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        out_of_range(
            name,
            format!("day {:02} does not exist in {:04}-{:02}", day, year, month),
        )
    })
}

/// Validate a record file name against `HHMMSS.payments`
///
/// Returns the time of day the name encodes.
pub fn validate_file_name(name: &str) -> Result<NaiveTime, NameError> {
    let stem = name
        .strip_suffix(RECORD_FILE_SUFFIX)
        .ok_or_else(|| NameError::MissingSuffix {
            name: name.to_string(),
            suffix: RECORD_FILE_SUFFIX,
        })?;

    let digits = exact_digits(
        name,
        stem,
        TIME_PREFIX_LEN,
        TIME_PREFIX_LEN + RECORD_FILE_SUFFIX.len(),
    )?;

    let hour = digits_value(&digits[0..2]);
    let minute = digits_value(&digits[2..4]);
    let second = digits_value(&digits[4..6]);

    // Rejects hour > 23, minute > 59 and second > 59
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        out_of_range(
            name,
            format!(
                "{:02}:{:02}:{:02} is not a valid time of day",
                hour, minute, second
            ),
        )
    })
}

/// Check that `field` is exactly `len` ASCII digits and return them
fn exact_digits<'a>(
    name: &str,
    field: &'a str,
    len: usize,
    expected_name_len: usize,
) -> Result<&'a [u8], NameError> {
    let bytes = field.as_bytes();

    if bytes.len() != len {
        return Err(NameError::WrongLength {
            name: name.to_string(),
            expected: expected_name_len,
            found: name.len(),
        });
    }

    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(NameError::NonDigit {
            name: name.to_string(),
            field: field.to_string(),
        });
    }

    Ok(bytes)
}

fn digits_value(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0'))
}

fn out_of_range(name: &str, reason: String) -> NameError {
    NameError::OutOfRange {
        name: name.to_string(),
        reason,
    }
}
