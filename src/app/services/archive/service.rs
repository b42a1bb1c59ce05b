//! Archive queries over the `root/YYYYMMDD/HHMMSS.payments` tree
//!
//! Nothing is cached: every call lists or reads the filesystem as it is now.

use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use super::listing::{Listing, SkippedEntry};
use crate::app::services::name_validator::{NameError, validate_day_name, validate_file_name};
use crate::app::services::record_parser::{ParseResult, RecordParser};
use crate::error::{ArchiveError, Result};

/// Read-only view of a payments archive rooted at one directory
///
/// Holds only the immutable root path, so a single instance can serve
/// concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct ArchiveService {
    root: PathBuf,
    parser: RecordParser,
}

impl ArchiveService {
    /// Open an archive, failing if `root` cannot be listed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        fs::read_dir(&root).map_err(|e| ArchiveError::from_io(&root, e))?;

        info!("Opened payments archive at {}", root.display());
        Ok(Self {
            root,
            parser: RecordParser::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List day directories whose names are valid `YYYYMMDD` dates
    ///
    /// Fails only when the root itself cannot be read.
    pub fn list_days(&self) -> Result<Listing> {
        let listing = list_valid_names(&self.root, "directory", validate_day_name)
            .map_err(|e| ArchiveError::from_io(&self.root, e))?;

        debug!(
            "Listed {} day directories ({} skipped)",
            listing.len(),
            listing.skipped.len()
        );
        Ok(listing)
    }

    /// List record files of `day` whose names are valid `HHMMSS.payments`
    ///
    /// `day` itself is not checked against the day naming pattern; any
    /// directory under the root that can be listed is accepted.
    pub fn list_files(&self, day: &str) -> Result<Listing> {
        let day_path = self.resolve(day)?;

        let listing = list_valid_names(&day_path, "file", validate_file_name)
            .map_err(|e| ArchiveError::not_found_io(day, e))?;

        debug!(
            "Listed {} record files in {} ({} skipped)",
            listing.entries.len(),
            day,
            listing.skipped.len()
        );
        Ok(listing)
    }

    /// Read and parse the record file at `relative_path` (`day/file`)
    ///
    /// No naming checks are applied; any readable file under the root is
    /// parsed.
    pub fn get_records(&self, relative_path: &str) -> Result<ParseResult> {
        let file_path = self.resolve(relative_path)?;

        let content =
            fs::read(&file_path).map_err(|e| ArchiveError::not_found_io(relative_path, e))?;

        let result = self
            .parser
            .parse_reader(content.as_slice())
            .map_err(|e| e.with_path(Path::new(relative_path)))?;

        debug!(
            "Read {} payments from {} ({} rows skipped)",
            result.records.len(),
            relative_path,
            result.stats.rows_skipped
        );
        Ok(result)
    }

    /// Join a relative path under the root, refusing anything that could
    /// leave it
    fn resolve(&self, relative_path: &str) -> Result<PathBuf> {
        let relative = Path::new(relative_path);

        let contained = !relative_path.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        if !contained {
            warn!("Rejected path outside archive root: '{}'", relative_path);
            return Err(ArchiveError::not_found(relative_path));
        }

        Ok(self.root.join(relative))
    }
}

/// List `dir` and keep the entries whose names pass `validate`
fn list_valid_names<T>(
    dir: &Path,
    kind: &str,
    validate: impl Fn(&str) -> std::result::Result<T, NameError>,
) -> std::io::Result<Listing> {
    let mut listing = Listing::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();

        let Some(name) = file_name.to_str() else {
            let name = file_name.to_string_lossy().into_owned();
            warn!("Skipping {} with non UTF-8 name '{}'", kind, name);
            listing.skipped.push(SkippedEntry {
                reason: format!("invalid name '{}': not valid UTF-8", name),
                name,
            });
            continue;
        };

        match validate(name) {
            Ok(_) => listing.entries.push(name.to_string()),
            Err(e) => {
                warn!("Skipping {}: {}", kind, e);
                listing.skipped.push(e.into());
            }
        }
    }

    Ok(listing)
}
