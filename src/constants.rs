//! Application constants for the payment archive
//!
//! Naming conventions of the on-disk layout, the payments table layout and
//! the service defaults live here.

// =============================================================================
// On-disk Naming Conventions
// =============================================================================

/// Day directories are named `YYYYMMDD`
pub const DAY_NAME_LEN: usize = 8;

/// Record files start with `HHMMSS`
pub const TIME_PREFIX_LEN: usize = 6;

/// Literal suffix every record file carries, compared byte for byte
pub const RECORD_FILE_SUFFIX: &str = ".payments";

/// Separator used between URL path segments and in `day/file` paths
pub const PATH_SEPARATOR: char = '/';

// =============================================================================
// Payments Table Layout
// =============================================================================

/// Number of columns in every data row
pub const PAYMENTS_COLUMNS: usize = 5;

/// Column positions within a data row
pub mod columns {
    pub const DATE: usize = 0;
    pub const TIME: usize = 1;
    pub const SEQUENCE: usize = 2;
    pub const AMOUNT: usize = 3;
    pub const COMMENT: usize = 4;
}

// =============================================================================
// Service Defaults
// =============================================================================

/// Listen address used when none is configured
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9999";

/// Data directory name resolved against the working directory by default
pub const DEFAULT_DATA_DIR_NAME: &str = "data";

/// Log filter target for this crate
pub const LOG_TARGET: &str = "payment_archive";

// =============================================================================
// HTTP Responses
// =============================================================================

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Generic body for 404 responses
pub const NOT_FOUND_BODY: &str = "not found";

/// Generic body for 500 responses
pub const SERVER_ERROR_BODY: &str = "server error";
