//! Property-based round-trip tests for history persistence.
//!
//! For any sequence of adds, persisting and then loading on a fresh store
//! instance over the same path reproduces an equal ordered sequence:
//! same ids, content, and timestamps.

use proptest::prelude::*;
use qrbar::managers::history_store::{HistoryStore, HistoryStoreTrait};
use qrbar::services::preferences::Preferences;

/// Strategy for generating non-empty item content, including characters
/// that must survive JSON encoding (quotes, backslashes, non-ASCII).
fn arb_content() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ._:/-]{1,40}",
        Just("with \"quotes\" and \\backslashes\\".to_string()),
        Just("日本語のテキスト".to_string()),
        Just("emoji ☕ and spaces  ".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn persist_then_load_reproduces_sequence(
        contents in prop::collection::vec(arb_content(), 0..10),
    ) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir
            .path()
            .join("preferences.json")
            .to_string_lossy()
            .to_string();

        let mut store = HistoryStore::new(Preferences::new(Some(path.clone())));
        store.load().expect("Fresh store should load empty");
        for content in &contents {
            store.add(content);
        }
        store.persist().expect("Persist should succeed on a temp path");

        let mut reloaded = HistoryStore::new(Preferences::new(Some(path)));
        let count = reloaded.load().expect("Reload should succeed");

        prop_assert_eq!(count, contents.len());
        prop_assert_eq!(reloaded.items(), store.items());
    }

    // Deletes are part of the persisted state too: a reload never
    // resurrects a deleted item.
    #[test]
    fn deleted_items_stay_deleted_across_reload(
        contents in prop::collection::vec(arb_content(), 1..8),
    ) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir
            .path()
            .join("preferences.json")
            .to_string_lossy()
            .to_string();

        let mut store = HistoryStore::new(Preferences::new(Some(path.clone())));
        store.load().expect("Fresh store should load empty");
        let added: Vec<_> = contents.iter().map(|c| store.add(c)).collect();

        let doomed = &added[added.len() / 2];
        store.delete(&doomed.id);

        let mut reloaded = HistoryStore::new(Preferences::new(Some(path)));
        reloaded.load().expect("Reload should succeed");

        prop_assert_eq!(reloaded.len(), contents.len() - 1);
        prop_assert!(reloaded.items().iter().all(|i| i.id != doomed.id));
    }
}
