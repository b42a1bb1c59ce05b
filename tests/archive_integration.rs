//! Integration tests for the archive library API
//!
//! These tests build a small archive on disk and go through the public
//! re-exports only, the way an embedding application would.

use payment_archive::{ArchiveError, ArchiveService, Payment, RequestShape, classify};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn create_archive() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_file(
        temp_dir.path(),
        "20220717/090000.payments",
        "date,time,sequence,amount,comment\n\
         20220717,090000,211,500,payment2\n\
         20220717,090000,212,600,payment3\n",
    );
    write_file(
        temp_dir.path(),
        "20220717/123000.payments",
        "date,time,sequence,amount,comment\n\
         20220717,123000,213,n/a,broken\n\
         20220717,123000,214,-75,\"refund, partial\"\n",
    );
    fs::create_dir(temp_dir.path().join("2022")).unwrap();
    temp_dir
}

/// Walk the archive from the root down, as the HTTP layer would
///
/// Purpose: Verify that every listed name leads to a readable resource
/// Benefit: Listings and lookups agree on how paths are joined
#[test]
fn test_walk_archive_from_root() {
    let temp_dir = create_archive();
    let archive = ArchiveService::open(temp_dir.path()).unwrap();

    let days = archive.list_days().unwrap();
    assert_eq!(days.entries, vec!["20220717"]);
    assert_eq!(days.skipped.len(), 1);
    assert_eq!(days.skipped[0].name, "2022");

    let mut files = archive.list_files("20220717").unwrap().into_entries();
    files.sort();
    assert_eq!(files, vec!["090000.payments", "123000.payments"]);

    let mut total = 0;
    for file in &files {
        let shape = classify(&format!("/20220717/{}", file));
        let path = shape.record_path().unwrap();
        total += archive.get_records(&path).unwrap().records.len();
    }
    assert_eq!(total, 3);
}

#[test]
fn test_records_keep_row_order_and_report_skips() {
    let temp_dir = create_archive();
    let archive = ArchiveService::open(temp_dir.path()).unwrap();

    let result = archive.get_records("20220717/123000.payments").unwrap();

    assert_eq!(
        result.records,
        vec![Payment::new(20220717123000, 214, -75, "refund, partial")]
    );
    assert_eq!(result.stats.total_rows, 2);
    assert_eq!(result.stats.rows_skipped, 1);
    assert_eq!(result.stats.skipped[0].row, 1);
    assert_eq!(result.stats.skipped[0].value, "n/a");
}

#[test]
fn test_classify_shapes() {
    assert_eq!(classify(""), RequestShape::Root);
    assert_eq!(classify("/"), RequestShape::Root);
    assert_eq!(
        classify("/20220717/"),
        RequestShape::Day {
            day: "20220717".to_string()
        }
    );
    assert_eq!(
        classify("/20220717/090000.payments").params(),
        vec!["20220717", "090000.payments"]
    );
    assert_eq!(classify("/a/b/c"), RequestShape::Invalid);
}

#[test]
fn test_error_kinds() {
    let temp_dir = create_archive();
    let archive = ArchiveService::open(temp_dir.path()).unwrap();

    assert!(archive.list_files("20990101").unwrap_err().is_not_found());
    assert!(
        archive
            .get_records("20220717/000000.payments")
            .unwrap_err()
            .is_not_found()
    );

    write_file(
        temp_dir.path(),
        "20220718/010101.payments",
        "date,time,sequence,amount,comment\n20220718,010101,1,2\n",
    );
    let err = archive.get_records("20220718/010101.payments").unwrap_err();
    assert!(matches!(err, ArchiveError::Malformed { .. }));
    assert!(!err.is_not_found());

    let missing_root = temp_dir.path().join("missing");
    assert!(ArchiveService::open(missing_root).unwrap_err().is_not_found());
}

#[test]
fn test_repeated_queries_are_identical() {
    let temp_dir = create_archive();
    let archive = ArchiveService::open(temp_dir.path()).unwrap();

    assert_eq!(archive.list_days().unwrap(), archive.list_days().unwrap());
    assert_eq!(
        archive.get_records("20220717/090000.payments").unwrap(),
        archive.get_records("20220717/090000.payments").unwrap()
    );
}
