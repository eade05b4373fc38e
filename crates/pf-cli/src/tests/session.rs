use crate::{FileSessionStore, SessionError, StoredSession};

use pf_core::UserId;
use pf_profile::SessionStore;

use googletest::prelude::*;
use tempfile::TempDir;

fn store(dir: &TempDir) -> FileSessionStore {
    FileSessionStore::new(dir.path().join("session.json"))
}

#[test]
fn given_no_file_when_load_then_none() {
    let dir = TempDir::new().unwrap();

    let loaded = store(&dir).load().unwrap();

    assert_that!(loaded, none());
}

#[test]
fn given_saved_session_when_load_then_same_session() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    let session = StoredSession::new("jwt", Some(UserId::new("u123").unwrap()));

    store.save(&session).unwrap();
    let loaded = store.load().unwrap();

    assert_that!(loaded, some(eq(&session)));
}

#[test]
fn given_save_when_done_then_no_temp_file_left() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    store.save(&StoredSession::new("jwt", None)).unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_that!(names, eq(&vec!["session.json".to_string()]));
}

#[test]
fn given_save_fails_when_done_then_no_temp_file_left() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    std::fs::create_dir(store.path()).unwrap();
    std::fs::write(store.path().join("occupied"), "x").unwrap();

    let result = store.save(&StoredSession::new("jwt", None));

    assert!(matches!(result, Err(SessionError::AtomicRename { .. })));
    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_that!(names, eq(&vec!["session.json".to_string()]));
}

#[test]
fn given_nested_path_when_save_then_directories_created() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("nested/deeper/session.json"));

    store.save(&StoredSession::new("jwt", None)).unwrap();

    assert!(store.path().exists());
}

#[test]
fn given_garbage_file_when_load_then_corrupted() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    std::fs::write(store.path(), "{not json").unwrap();

    let result = store.load();

    assert!(matches!(result, Err(SessionError::Corrupted { .. })));
}

#[test]
fn given_saved_session_when_cleared_then_file_removed() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.save(&StoredSession::new("jwt", None)).unwrap();

    store.clear().unwrap();

    assert!(!store.path().exists());
    assert_that!(store.load().unwrap(), none());
}

#[test]
fn given_no_file_when_cleared_then_ok() {
    let dir = TempDir::new().unwrap();

    assert_that!(store(&dir).clear(), ok(anything()));
}
