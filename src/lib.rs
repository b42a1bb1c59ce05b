//! Payment Archive Library
//!
//! A read-only view over a directory tree of payment CSV files, partitioned
//! by day and then by time of day:
//!
//! ```text
//! <root>/20220717/090000.payments
//! <root>/20220717/093000.payments
//! <root>/20220718/080000.payments
//! ```
//!
//! This library provides tools for:
//! - Listing valid day directories and record files, with junk names reported
//! - Parsing record files into payments, skipping rows with bad integers
//! - Classifying request paths into root, day and record shapes
//! - Serving the archive as JSON over HTTP with axum

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Core application modules
pub mod app {
    pub mod services {
        pub mod archive;
        pub mod name_validator;
        pub mod path_classifier;
        pub mod record_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// HTTP surface
pub mod server;

// Re-export commonly used types
pub use app::services::archive::{ArchiveService, Listing, SkippedEntry};
pub use app::services::path_classifier::{RequestShape, classify};
pub use app::services::record_parser::{ParseResult, RecordParser};
pub use config::ServerConfig;
pub use error::{ArchiveError, Result};
pub use models::Payment;
