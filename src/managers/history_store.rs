//! History store for QRBar.
//!
//! Implements `HistoryStoreTrait` — the ordered, newest-first collection
//! of generated QR codes, persisted in full to a named preferences slot
//! after every mutation.
//!
//! All mutation goes through `&mut self`, so exclusive ownership is the
//! serialization mechanism: there is exactly one logical writer.

use tracing::warn;
use uuid::Uuid;

use crate::services::preferences::{Preferences, PreferencesTrait};
use crate::types::errors::HistoryError;
use crate::types::qr_item::QrItem;

/// Preferences slot holding the serialized history.
const HISTORY_KEY: &str = "qrcodes";

/// Trait defining history store operations.
pub trait HistoryStoreTrait {
    fn load(&mut self) -> Result<usize, HistoryError>;
    fn add(&mut self, content: &str) -> QrItem;
    fn delete(&mut self, id: &Uuid) -> bool;
    fn clear(&mut self);
    fn search(&self, query: &str) -> Vec<QrItem>;
    fn items(&self) -> &[QrItem];
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn persist(&mut self) -> Result<(), HistoryError>;
}

/// History store backed by a preferences slot.
///
/// The in-memory sequence is the source of truth; persistence failures
/// are reported but never roll back an applied mutation.
pub struct HistoryStore {
    items: Vec<QrItem>,
    prefs: Preferences,
}

impl HistoryStore {
    /// Creates an empty store over the given preferences. Call
    /// [`HistoryStoreTrait::load`] before use to pick up persisted items.
    pub fn new(prefs: Preferences) -> Self {
        Self {
            items: Vec::new(),
            prefs,
        }
    }

    /// Persists after a mutation, logging instead of propagating: the
    /// in-memory state stays authoritative until the next successful write.
    fn persist_after_mutation(&mut self) {
        if let Err(e) = self.persist() {
            warn!("QR history not persisted: {}", e);
        }
    }
}

impl HistoryStoreTrait for HistoryStore {
    /// Loads the persisted history into memory, returning the item count.
    ///
    /// A missing slot yields an empty collection. An unreadable
    /// preferences file or an undecodable slot value also yields an empty
    /// collection, but returns the error so the caller can log it.
    fn load(&mut self) -> Result<usize, HistoryError> {
        self.items.clear();

        if let Err(e) = self.prefs.load() {
            return Err(HistoryError::LoadFailed(e.to_string()));
        }

        let value = match self.prefs.get(HISTORY_KEY) {
            Some(v) => v.clone(),
            None => return Ok(0),
        };

        match serde_json::from_value::<Vec<QrItem>>(value) {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                Ok(count)
            }
            Err(e) => Err(HistoryError::LoadFailed(format!(
                "Failed to decode slot '{}': {}",
                HISTORY_KEY, e
            ))),
        }
    }

    /// Creates a new item for `content`, inserts it at the front, and
    /// persists the full sequence.
    ///
    /// Precondition: `content` is non-empty; callers enforce this before
    /// invoking. The created item is returned even if persistence failed.
    fn add(&mut self, content: &str) -> QrItem {
        let item = QrItem::new(content);
        self.items.insert(0, item.clone());
        self.persist_after_mutation();
        item
    }

    /// Removes the item with the given id, then persists. Idempotent:
    /// deleting an absent id leaves the collection unchanged and returns
    /// `false`.
    fn delete(&mut self, id: &Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        let removed = self.items.len() != before;
        self.persist_after_mutation();
        removed
    }

    /// Removes every item and persists the now-empty sequence.
    fn clear(&mut self) {
        self.items.clear();
        self.persist_after_mutation();
    }

    /// Returns items whose content contains `query`, case-insensitively,
    /// in existing order. An empty query returns the full sequence.
    fn search(&self, query: &str) -> Vec<QrItem> {
        if query.is_empty() {
            return self.items.clone();
        }

        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.content.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Returns the full ordered sequence, newest first.
    fn items(&self) -> &[QrItem] {
        &self.items
    }

    /// Returns the number of stored items.
    fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the store holds no items.
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serializes the full sequence into the preferences slot, replacing
    /// the prior value entirely.
    fn persist(&mut self) -> Result<(), HistoryError> {
        let value = serde_json::to_value(&self.items).map_err(|e| {
            HistoryError::PersistFailed(format!("Failed to encode history: {}", e))
        })?;

        self.prefs
            .set(HISTORY_KEY, value)
            .map_err(|e| HistoryError::PersistFailed(e.to_string()))
    }
}
