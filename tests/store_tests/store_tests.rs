//! Tests for RecordStore
//!
//! These tests verify:
//! - Opening a store without creating its file
//! - Append semantics (no duplicate check, file creation)
//! - Lazy listing in file order
//! - First-match search
//! - Delete of every record sharing a roll
//! - Behaviour on absent, unterminated and malformed files

use std::fs;
use std::path::PathBuf;

use roster::config::{Config, SyncStrategy};
use roster::{RecordStore, RosterError, StudentRecord};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, RecordStore) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .store_path(temp_dir.path().join("students.txt"))
        .sync_strategy(SyncStrategy::EveryWrite)
        .build();
    let store = RecordStore::open(config).unwrap();
    (temp_dir, store)
}

fn record(roll: &str, name: &str, marks: &str) -> StudentRecord {
    StudentRecord::new(roll, name, marks)
}

fn file_contents(store: &RecordStore) -> String {
    fs::read_to_string(store.path()).unwrap()
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_does_not_create_file() {
    let (_temp, store) = setup_temp_store();
    assert!(!store.path().exists());
}

#[test]
fn test_open_path_uses_default_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("roll.txt");

    let store = RecordStore::open_path(&path).unwrap();

    assert_eq!(store.path(), path.as_path());
    assert_eq!(store.config().store_path, path);
    assert_eq!(store.config().sync_strategy, SyncStrategy::OsBuffered);
}

#[test]
fn test_open_rejects_directory_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().store_path(temp_dir.path()).build();

    assert!(matches!(
        RecordStore::open(config),
        Err(RosterError::Config(_))
    ));
}

#[test]
fn test_open_rejects_empty_path() {
    let config = Config::builder().store_path(PathBuf::new()).build();

    assert!(matches!(
        RecordStore::open(config),
        Err(RosterError::Config(_))
    ));
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_creates_file() {
    let (_temp, store) = setup_temp_store();

    store.add(&record("1", "A", "10")).unwrap();

    assert!(store.path().exists());
    assert_eq!(file_contents(&store), "1,A,10\n");
}

#[test]
fn test_add_appends_in_order() {
    let (_temp, store) = setup_temp_store();

    store.add(&record("1", "A", "10")).unwrap();
    store.add(&record("2", "B", "20")).unwrap();
    store.add(&record("3", "C", "30")).unwrap();

    assert_eq!(file_contents(&store), "1,A,10\n2,B,20\n3,C,30\n");
}

#[test]
fn test_add_allows_duplicate_rolls() {
    let (_temp, store) = setup_temp_store();

    store.add(&record("1", "A", "10")).unwrap();
    store.add(&record("1", "B", "20")).unwrap();

    assert_eq!(store.records().unwrap().len(), 2);
}

#[test]
fn test_add_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("class").join("2024").join("students.txt");
    let store = RecordStore::open_path(&path).unwrap();

    store.add(&record("1", "A", "10")).unwrap();

    assert!(path.exists());
}

#[test]
fn test_add_terminates_unterminated_last_line() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "1,A,10").unwrap();
    assert_eq!(store.records().unwrap(), vec![record("1", "A", "10")]);

    store.add(&record("2", "B", "20")).unwrap();

    assert_eq!(file_contents(&store), "1,A,10\n2,B,20\n");
    assert_eq!(
        store.records().unwrap(),
        vec![record("1", "A", "10"), record("2", "B", "20")]
    );
}

#[test]
fn test_add_to_empty_file_adds_no_blank_line() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "").unwrap();

    store.add(&record("1", "A", "10")).unwrap();

    assert_eq!(file_contents(&store), "1,A,10\n");
}

#[test]
fn test_padded_fields_are_stored_as_entered() {
    let (_temp, store) = setup_temp_store();
    let padded = record(" 7", "Asha", "91 ");

    store.add(&padded).unwrap();

    assert_eq!(store.records().unwrap(), vec![padded.clone()]);
    assert_eq!(store.search(" 7").unwrap(), Some(padded));
    assert_eq!(store.search("7").unwrap(), None);
    assert_eq!(store.delete(" 7").unwrap(), 1);
    assert!(store.records().unwrap().is_empty());
}

#[test]
fn test_add_rejects_delimiter_without_writing() {
    let (_temp, store) = setup_temp_store();

    let result = store.add(&record("1", "Doe, John", "50"));

    assert!(matches!(result, Err(RosterError::InvalidField { .. })));
    assert!(!store.path().exists());
}

// =============================================================================
// List Tests
// =============================================================================

#[test]
fn test_list_absent_file_is_empty() {
    let (_temp, store) = setup_temp_store();

    let mut iter = store.list().unwrap();
    assert!(iter.next().is_none());
}

#[test]
fn test_list_empty_file_is_empty() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "").unwrap();

    assert!(store.records().unwrap().is_empty());
}

#[test]
fn test_list_returns_file_order() {
    let (_temp, store) = setup_temp_store();
    store.add(&record("9", "Z", "1")).unwrap();
    store.add(&record("1", "A", "2")).unwrap();

    let records = store.records().unwrap();

    assert_eq!(records, vec![record("9", "Z", "1"), record("1", "A", "2")]);
}

#[test]
fn test_list_is_restartable() {
    let (_temp, store) = setup_temp_store();
    store.add(&record("1", "A", "10")).unwrap();
    store.add(&record("2", "B", "20")).unwrap();

    let first: Vec<_> = store.list().unwrap().map(|r| r.unwrap()).collect();
    let second: Vec<_> = store.list().unwrap().map(|r| r.unwrap()).collect();

    assert_eq!(first, second);
}

#[test]
fn test_list_skips_blank_lines_and_tolerates_crlf() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "1,A,10\r\n\r\n2,B,20\r\n").unwrap();

    let records = store.records().unwrap();

    assert_eq!(records, vec![record("1", "A", "10"), record("2", "B", "20")]);
}

#[test]
fn test_list_reports_malformed_line_number() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "1,A,10\n2,B\n3,C,30\n").unwrap();

    let mut iter = store.list().unwrap();

    assert_eq!(iter.next().unwrap().unwrap(), record("1", "A", "10"));
    match iter.next().unwrap() {
        Err(RosterError::MalformedRecord { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "2,B");
        }
        other => panic!("Expected MalformedRecord, got {:?}", other),
    }
    assert_eq!(iter.next().unwrap().unwrap(), record("3", "C", "30"));
}

#[test]
fn test_records_fails_on_malformed_line() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "1,A,10\nbroken\n").unwrap();

    assert!(matches!(
        store.records(),
        Err(RosterError::MalformedRecord { line: 2, .. })
    ));
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_finds_record() {
    let (_temp, store) = setup_temp_store();
    store.add(&record("1", "A", "10")).unwrap();
    store.add(&record("2", "B", "20")).unwrap();

    assert_eq!(store.search("2").unwrap(), Some(record("2", "B", "20")));
}

#[test]
fn test_search_missing_roll() {
    let (_temp, store) = setup_temp_store();
    store.add(&record("1", "A", "10")).unwrap();

    assert_eq!(store.search("42").unwrap(), None);
}

#[test]
fn test_search_absent_file_reports_missing_store() {
    let (_temp, store) = setup_temp_store();

    match store.search("1") {
        Err(RosterError::StoreMissing(path)) => assert_eq!(path, store.path()),
        other => panic!("Expected StoreMissing, got {:?}", other),
    }
    assert!(!store.path().exists());
}

#[test]
fn test_search_empty_file_is_not_found() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "").unwrap();

    assert_eq!(store.search("1").unwrap(), None);
}

#[test]
fn test_search_returns_first_match() {
    let (_temp, store) = setup_temp_store();
    store.add(&record("1", "A", "10")).unwrap();
    store.add(&record("1", "B", "20")).unwrap();

    assert_eq!(store.search("1").unwrap(), Some(record("1", "A", "10")));
}

#[test]
fn test_search_stops_before_later_malformed_line() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "1,A,10\nnot a record\n").unwrap();

    assert_eq!(store.search("1").unwrap(), Some(record("1", "A", "10")));
    assert!(store.search("2").is_err());
}

#[test]
fn test_search_is_exact_match() {
    let (_temp, store) = setup_temp_store();
    store.add(&record("10", "A", "10")).unwrap();

    assert_eq!(store.search("1").unwrap(), None);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_record() {
    let (_temp, store) = setup_temp_store();
    store.add(&record("1", "A", "10")).unwrap();
    store.add(&record("2", "B", "20")).unwrap();

    assert_eq!(store.delete("1").unwrap(), 1);

    assert_eq!(store.search("1").unwrap(), None);
    assert_eq!(file_contents(&store), "2,B,20\n");
}

#[test]
fn test_delete_removes_all_duplicates() {
    let (_temp, store) = setup_temp_store();
    store.add(&record("1", "A", "10")).unwrap();
    store.add(&record("2", "C", "30")).unwrap();
    store.add(&record("1", "B", "20")).unwrap();

    assert_eq!(store.delete("1").unwrap(), 2);

    assert_eq!(store.records().unwrap(), vec![record("2", "C", "30")]);
}

#[test]
fn test_delete_missing_roll_leaves_file_untouched() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "1,A,10\n\n2,B,20\n").unwrap();

    assert_eq!(store.delete("3").unwrap(), 0);

    assert_eq!(file_contents(&store), "1,A,10\n\n2,B,20\n");
}

#[test]
fn test_delete_absent_file_reports_missing_store() {
    let (_temp, store) = setup_temp_store();

    assert!(matches!(
        store.delete("1"),
        Err(RosterError::StoreMissing(_))
    ));
    assert!(!store.path().exists());
}

#[test]
fn test_delete_last_record_leaves_empty_file() {
    let (_temp, store) = setup_temp_store();
    store.add(&record("1", "A", "10")).unwrap();

    assert_eq!(store.delete("1").unwrap(), 1);

    assert_eq!(file_contents(&store), "");
    assert!(store.records().unwrap().is_empty());
}

#[test]
fn test_delete_preserves_untouched_lines_verbatim() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "1,A,10\n 2,B,20 \n").unwrap();

    assert_eq!(store.delete("1").unwrap(), 1);

    assert_eq!(file_contents(&store), " 2,B,20 \n");
}

#[test]
fn test_delete_malformed_file_is_not_rewritten() {
    let (_temp, store) = setup_temp_store();
    let original = "1,A,10\nbroken\n2,B,20\n";
    fs::write(store.path(), original).unwrap();

    let result = store.delete("1");

    assert!(matches!(
        result,
        Err(RosterError::MalformedRecord { line: 2, .. })
    ));
    assert_eq!(file_contents(&store), original);
}

#[test]
fn test_add_after_delete() {
    let (_temp, store) = setup_temp_store();
    store.add(&record("1", "A", "10")).unwrap();
    store.delete("1").unwrap();

    store.add(&record("1", "A2", "11")).unwrap();

    assert_eq!(store.search("1").unwrap(), Some(record("1", "A2", "11")));
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_reopen_sees_previous_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.txt");

    {
        let store = RecordStore::open_path(&path).unwrap();
        store.add(&record("1", "A", "10")).unwrap();
        store.close().unwrap();
    }

    let store = RecordStore::open_path(&path).unwrap();
    assert_eq!(store.records().unwrap(), vec![record("1", "A", "10")]);
}
