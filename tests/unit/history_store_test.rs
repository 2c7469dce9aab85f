//! Unit tests for the HistoryStore public API.
//!
//! These tests exercise adding, deleting, clearing, searching, and
//! persistence round-trips through the `HistoryStoreTrait` interface,
//! with each store backed by a throwaway preferences file.

use qrbar::managers::history_store::{HistoryStore, HistoryStoreTrait};
use qrbar::services::preferences::Preferences;
use tempfile::TempDir;
use uuid::Uuid;

/// Helper: create a loaded HistoryStore backed by a fresh temp path.
fn setup() -> (TempDir, HistoryStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut store = HistoryStore::new(prefs_at(&dir));
    store.load().expect("Fresh store should load empty");
    (dir, store)
}

fn prefs_at(dir: &TempDir) -> Preferences {
    let path = dir
        .path()
        .join("preferences.json")
        .to_string_lossy()
        .to_string();
    Preferences::new(Some(path))
}

/// New items always land at index 0, newest first.
#[test]
fn test_add_inserts_at_front() {
    let (_dir, mut store) = setup();

    store.add("https://example.com");
    store.add("second");

    assert_eq!(store.len(), 2);
    assert_eq!(store.items()[0].content, "second");
    assert_eq!(store.items()[1].content, "https://example.com");
}

/// An add followed by an empty search puts the new item first.
#[test]
fn test_add_then_empty_search_yields_item_first() {
    let (_dir, mut store) = setup();

    store.add("older");
    store.add("newest entry");

    let all = store.search("");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].content, "newest entry");
}

/// Every item gets a distinct id.
#[test]
fn test_add_assigns_unique_ids() {
    let (_dir, mut store) = setup();

    for _ in 0..20 {
        store.add("same content");
    }

    let mut ids: Vec<Uuid> = store.items().iter().map(|i| i.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

/// delete removes exactly the matching item.
#[test]
fn test_delete_removes_single_item() {
    let (_dir, mut store) = setup();

    let keep = store.add("keep me");
    let doomed = store.add("delete me");

    assert!(store.delete(&doomed.id));
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].id, keep.id);
}

/// Deleting an absent id is a no-op and reports false.
#[test]
fn test_delete_absent_id_is_noop() {
    let (_dir, mut store) = setup();

    store.add("only item");
    let before: Vec<_> = store.items().to_vec();

    assert!(!store.delete(&Uuid::new_v4()));
    assert_eq!(store.items(), before.as_slice());

    // Idempotent: deleting a real id twice removes once
    let id = store.items()[0].id;
    assert!(store.delete(&id));
    assert!(!store.delete(&id));
    assert!(store.is_empty());
}

/// clear empties the store and the durable slot.
#[test]
fn test_clear_empties_store_and_slot() {
    let (dir, mut store) = setup();

    store.add("one");
    store.add("two");
    store.clear();
    assert!(store.is_empty());

    // A fresh store over the same path sees the cleared slot
    let mut store2 = HistoryStore::new(prefs_at(&dir));
    assert_eq!(store2.load().unwrap(), 0);
    assert!(store2.is_empty());
}

/// Search is a case-insensitive substring match over content.
#[test]
fn test_search_is_case_insensitive() {
    let (_dir, mut store) = setup();

    store.add("Hello World");

    assert_eq!(store.search("hello").len(), 1);
    assert_eq!(store.search("WORLD").len(), 1);
    assert_eq!(store.search("o W").len(), 1);
    assert!(store.search("xyz").is_empty());
}

/// An empty query returns the full sequence in existing order.
#[test]
fn test_search_empty_query_returns_all_in_order() {
    let (_dir, mut store) = setup();

    store.add("a");
    store.add("b");
    store.add("c");

    let all = store.search("");
    assert_eq!(all.as_slice(), store.items());
}

/// Search never mutates the store.
#[test]
fn test_search_does_not_mutate() {
    let (_dir, mut store) = setup();

    store.add("alpha");
    store.add("beta");
    let before: Vec<_> = store.items().to_vec();

    store.search("alpha");
    store.search("");
    store.search("no such item");

    assert_eq!(store.items(), before.as_slice());
}

/// A persisted sequence is reproduced exactly by a fresh store instance:
/// same ids, content, and timestamps, in the same order.
#[test]
fn test_persist_load_roundtrip_on_fresh_store() {
    let (dir, mut store) = setup();

    store.add("https://example.com");
    store.add("wifi: hunter2");
    store.add("日本語のテキスト");
    store.persist().unwrap();

    let mut store2 = HistoryStore::new(prefs_at(&dir));
    assert_eq!(store2.load().unwrap(), 3);
    assert_eq!(store2.items(), store.items());
}

/// A corrupt slot value loads as an error plus an empty collection, and
/// the store recovers on the next write.
#[test]
fn test_corrupt_slot_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("preferences.json")
        .to_string_lossy()
        .to_string();
    std::fs::write(&path, r#"{ "qrcodes": "definitely not a list" }"#).unwrap();

    let mut store = HistoryStore::new(Preferences::new(Some(path)));
    assert!(store.load().is_err());
    assert!(store.is_empty());

    // Next mutation rewrites the slot; a fresh load now succeeds
    store.add("recovered");
    let mut store2 = HistoryStore::new(prefs_at(&dir));
    assert_eq!(store2.load().unwrap(), 1);
    assert_eq!(store2.items()[0].content, "recovered");
}

/// A corrupt preferences file (not just the slot) also degrades to empty.
#[test]
fn test_corrupt_preferences_file_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("preferences.json")
        .to_string_lossy()
        .to_string();
    std::fs::write(&path, "@@@ not json @@@").unwrap();

    let mut store = HistoryStore::new(Preferences::new(Some(path)));
    assert!(store.load().is_err());
    assert!(store.is_empty());
}

/// The end-to-end scenario: add two, delete the newer, one remains.
#[test]
fn test_add_add_delete_scenario() {
    let (_dir, mut store) = setup();
    assert!(store.is_empty());

    store.add("https://example.com");
    assert_eq!(store.items()[0].content, "https://example.com");

    let second = store.add("second");
    assert_eq!(store.items()[0].content, "second");
    assert_eq!(store.items()[1].content, "https://example.com");

    store.delete(&second.id);
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].content, "https://example.com");
}
