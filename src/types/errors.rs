use std::fmt;

// === EncodeError ===

/// Errors produced by the QR encoder adapter.
#[derive(Debug)]
pub enum EncodeError {
    /// The input exceeds the capacity of the QR symbology at the
    /// configured error-correction level.
    DataTooLong(String),
    /// The underlying encode or render step failed.
    EncodingFailed(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::DataTooLong(msg) => write!(f, "QR input too long: {}", msg),
            EncodeError::EncodingFailed(msg) => write!(f, "QR encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for EncodeError {}

// === HistoryError ===

/// Errors related to the QR history store.
#[derive(Debug)]
pub enum HistoryError {
    /// The persisted history could not be decoded; the store fell back to
    /// an empty collection.
    LoadFailed(String),
    /// The history could not be written to the durable slot; the
    /// in-memory collection remains the source of truth.
    PersistFailed(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::LoadFailed(msg) => write!(f, "History load failed: {}", msg),
            HistoryError::PersistFailed(msg) => write!(f, "History persist failed: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}

// === PreferencesError ===

/// Errors related to the durable preferences file.
#[derive(Debug)]
pub enum PreferencesError {
    /// An I/O error occurred while reading or writing the preferences file.
    IoError(String),
    /// Failed to serialize or deserialize the preferences contents.
    SerializationError(String),
}

impl fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferencesError::IoError(msg) => write!(f, "Preferences I/O error: {}", msg),
            PreferencesError::SerializationError(msg) => {
                write!(f, "Preferences serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PreferencesError {}

// === ClipboardError ===

/// Errors related to system clipboard access.
#[derive(Debug)]
pub enum ClipboardError {
    /// The system clipboard could not be opened (e.g. headless session).
    Unavailable(String),
    /// Reading from the clipboard failed.
    ReadFailed(String),
    /// Writing to the clipboard failed.
    WriteFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::ReadFailed(msg) => write!(f, "Clipboard read failed: {}", msg),
            ClipboardError::WriteFailed(msg) => write!(f, "Clipboard write failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}
