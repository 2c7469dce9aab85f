use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single generated QR code in the history.
///
/// Items are immutable once created: the store only ever inserts new items
/// at the front or removes existing ones by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrItem {
    pub id: Uuid,
    pub content: String,
    pub timestamp: i64,
}

impl QrItem {
    /// Creates a new item with a fresh id and the current wall-clock time.
    pub fn new(content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.to_string(),
            timestamp: Self::now(),
        }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}
