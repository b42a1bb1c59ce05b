//! Directory listing results with skip diagnostics

use serde::{Deserialize, Serialize};

use crate::app::services::name_validator::NameError;

/// A directory entry left out of a listing because its name does not follow
/// the archive layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: String,
}

impl From<NameError> for SkippedEntry {
    fn from(error: NameError) -> Self {
        Self {
            name: error.name().to_string(),
            reason: error.to_string(),
        }
    }
}

/// Valid entry names of one directory, in enumeration order, plus the
/// entries that were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub entries: Vec<String>,
    pub skipped: Vec<SkippedEntry>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entry names only, for serialization to clients
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
