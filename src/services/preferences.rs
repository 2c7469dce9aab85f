// QRBar preferences store
// A per-user key-value store holding named JSON slots (the durable home of
// the QR history). Backed by a single JSON object file at the
// platform-specific config path.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::platform;
use crate::types::errors::PreferencesError;

/// Trait defining the preferences store interface.
pub trait PreferencesTrait {
    fn load(&mut self) -> Result<(), PreferencesError>;
    fn get(&self, key: &str) -> Option<&Value>;
    fn set(&mut self, key: &str, value: Value) -> Result<(), PreferencesError>;
    fn remove(&mut self, key: &str) -> Result<(), PreferencesError>;
    fn path(&self) -> &str;
}

/// Preferences store that persists named values as a JSON object on disk.
pub struct Preferences {
    file_path: String,
    values: Map<String, Value>,
}

impl Preferences {
    /// Creates a new `Preferences` store.
    ///
    /// If `path_override` is `Some`, uses that path for the backing file.
    /// Otherwise, uses the platform-specific config directory with
    /// `preferences.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let file_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("preferences.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            file_path,
            values: Map::new(),
        }
    }

    /// Writes the full key-value map to the backing file, replacing its
    /// prior contents. Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), PreferencesError> {
        let path = Path::new(&self.file_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PreferencesError::IoError(format!("Failed to create preferences directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&Value::Object(self.values.clone())).map_err(
            |e| PreferencesError::SerializationError(format!("Failed to serialize preferences: {}", e)),
        )?;

        fs::write(path, json).map_err(|e| {
            PreferencesError::IoError(format!("Failed to write preferences file: {}", e))
        })?;

        Ok(())
    }
}

impl PreferencesTrait for Preferences {
    /// Loads the key-value map from the backing file.
    ///
    /// A missing file yields an empty map. A file that exists but cannot
    /// be read or parsed as a JSON object yields an error and leaves the
    /// in-memory map empty.
    fn load(&mut self) -> Result<(), PreferencesError> {
        let path = Path::new(&self.file_path);

        if !path.exists() {
            self.values = Map::new();
            return Ok(());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            PreferencesError::IoError(format!("Failed to read preferences file: {}", e))
        })?;

        let parsed: Value = serde_json::from_str(&content).map_err(|e| {
            PreferencesError::SerializationError(format!("Failed to parse preferences file: {}", e))
        })?;

        match parsed {
            Value::Object(map) => {
                self.values = map;
                Ok(())
            }
            _ => Err(PreferencesError::SerializationError(
                "Preferences file root must be a JSON object".to_string(),
            )),
        }
    }

    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Stores `value` under `key` and writes the whole map back to disk.
    fn set(&mut self, key: &str, value: Value) -> Result<(), PreferencesError> {
        self.values.insert(key.to_string(), value);
        self.save()
    }

    /// Removes the value stored under `key` (no-op if absent) and writes
    /// the whole map back to disk.
    fn remove(&mut self, key: &str) -> Result<(), PreferencesError> {
        self.values.remove(key);
        self.save()
    }

    /// Returns the path to the backing file.
    fn path(&self) -> &str {
        &self.file_path
    }
}
