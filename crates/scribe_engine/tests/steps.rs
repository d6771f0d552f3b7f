use std::fs;

use scribe_engine::steps::{
    close_handle, create_file, delete_file, file_exists, is_handle_open, write_and_flush,
};
use scribe_engine::{FailureKind, StdFileSystem, WriteHandle};
use tempfile::TempDir;

mod common;
use common::{FaultyFileSystem, Faults};

fn init_logging() {
    scribe_logging::initialize_for_tests();
}

#[test]
fn close_handle_closes_an_open_handle() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Testfile.txt");

    let mut handle = create_file(&StdFileSystem, &path).unwrap();
    assert!(is_handle_open(&handle));
    assert!(close_handle(&mut handle));
    assert!(!is_handle_open(&handle));
}

#[test]
fn closing_twice_reports_false_instead_of_failing() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Testfile.txt");

    let mut handle = create_file(&StdFileSystem, &path).unwrap();
    assert!(close_handle(&mut handle));
    assert!(!close_handle(&mut handle));
}

#[test]
fn closed_handle_rejects_writes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("closed.txt");

    let mut handle = create_file(&StdFileSystem, &path).unwrap();
    close_handle(&mut handle);
    assert!(write_and_flush(&mut handle, "late").is_err());
    assert!(handle.flush().is_err());
}

#[test]
fn create_file_maps_os_errors_to_creation() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing-dir").join("file.txt");

    let err = create_file(&StdFileSystem, &path).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Creation);
    assert_eq!(err.path(), path.as_path());
    assert!(!path.exists());
}

#[test]
fn create_file_truncates_existing_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("old.txt");
    fs::write(&path, "previous content").unwrap();

    let mut handle = create_file(&StdFileSystem, &path).unwrap();
    assert!(write_and_flush(&mut handle, "new").unwrap());
    close_handle(&mut handle);
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn write_and_flush_reports_sync_failure_as_false() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("unsynced.txt");
    let faulty = FaultyFileSystem::new(Faults {
        sync: true,
        ..Faults::default()
    });

    let mut handle = create_file(&faulty, &path).unwrap();
    assert!(!write_and_flush(&mut handle, "text").unwrap());
    close_handle(&mut handle);
    // The buffer was flushed to the OS before the sync attempt.
    assert_eq!(fs::read_to_string(&path).unwrap(), "text");
}

#[test]
fn write_and_flush_propagates_flush_errors() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.txt");
    let faulty = FaultyFileSystem::new(Faults {
        flush: true,
        ..Faults::default()
    });

    let mut handle = create_file(&faulty, &path).unwrap();
    let err = write_and_flush(&mut handle, "text").unwrap_err();
    assert_eq!(err.to_string(), "flush failed");
    assert_eq!(faulty.calls().sync, 0);
}

#[test]
fn file_exists_and_delete_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gone.txt");
    assert!(!file_exists(&StdFileSystem, &path));

    fs::write(&path, "x").unwrap();
    assert!(file_exists(&StdFileSystem, &path));

    delete_file(&StdFileSystem, &path).unwrap();
    assert!(!file_exists(&StdFileSystem, &path));
}

#[test]
fn delete_file_maps_os_errors_to_deletion() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("never-existed.txt");

    let err = delete_file(&StdFileSystem, &path).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Deletion);
}

#[test]
fn close_discards_bytes_that_were_never_flushed() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("buffered.txt");

    let mut handle = create_file(&StdFileSystem, &path).unwrap();
    handle.write_all(b"buffered").unwrap();
    assert!(close_handle(&mut handle));

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
