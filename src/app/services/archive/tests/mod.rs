//! Test fixtures for the archive service


use std::fs;
use std::path::Path;
use tempfile::TempDir;

use super::ArchiveService;

pub const DAY_ONE_TABLE: &str = "date,time,sequence,amount,comment
20220717,090000,211,500,payment2
20220717,090000,212,600,payment3";

pub const DAY_TWO_TABLE: &str = "date,time,sequence,amount,comment
20220718,010101,300,1500,payment4
20220718,010101,301,3000,payment5";

/// Write `content` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Archive with two valid days holding one record file each
pub fn create_test_archive() -> (TempDir, ArchiveService) {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "20220717/090000.payments", DAY_ONE_TABLE);
    write_file(temp_dir.path(), "20220718/010101.payments", DAY_TWO_TABLE);

    let service = ArchiveService::open(temp_dir.path()).unwrap();
    (temp_dir, service)
}

pub fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}
