//! Payments archive service
//!
//! Combines the naming checks and the table parser over one archive root:
//!
//! ```text
//! root/
//!   20220717/
//!     090000.payments
//!     123000.payments
//!   20220718/
//!     010101.payments
//! ```
//!
//! - [`ArchiveService::list_days`] - valid day directories under the root
//! - [`ArchiveService::list_files`] - valid record files under one day
//! - [`ArchiveService::get_records`] - payments parsed from one file

pub mod listing;
pub mod service;

#[cfg(test)]
mod tests;

pub use listing::{Listing, SkippedEntry};
pub use service::ArchiveService;
