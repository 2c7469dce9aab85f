//! App Core for QRBar.
//!
//! Central struct holding the history store and encoder, managing the
//! application lifecycle: construct → `startup()` → operations →
//! `shutdown()`. The store is an explicitly constructed instance owned
//! here and passed by reference to whoever needs it; no shared statics.

use tracing::warn;

use crate::managers::history_store::{HistoryStore, HistoryStoreTrait};
use crate::services::preferences::Preferences;
use crate::services::qr_encoder::QrEncoder;

/// Central application struct holding the QR history and encoder.
pub struct App {
    pub store: HistoryStore,
    pub encoder: QrEncoder,
}

impl App {
    /// Creates a new App over the given preferences path.
    ///
    /// If `prefs_path` is `None`, the platform-specific preferences
    /// location is used. The store starts empty; call [`App::startup`]
    /// to load persisted history.
    pub fn new(prefs_path: Option<String>) -> Self {
        let prefs = Preferences::new(prefs_path);

        Self {
            store: HistoryStore::new(prefs),
            encoder: QrEncoder::new(),
        }
    }

    /// Startup sequence: load the persisted history.
    ///
    /// A corrupt or unreadable slot is not fatal: the store falls back
    /// to an empty collection and the failure is logged.
    pub fn startup(&mut self) {
        if let Err(e) = self.store.load() {
            warn!("Starting with empty QR history: {}", e);
        }
    }

    /// Shutdown sequence: write the history back to the durable slot.
    ///
    /// A write failure is logged; in-memory state is discarded with the
    /// process either way.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.store.persist() {
            warn!("Final history persist failed: {}", e);
        }
    }
}
