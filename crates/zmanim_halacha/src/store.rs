//! String key/value preference storage.
//!
//! Writers hold the lock for the whole update (including the file write in
//! [`JsonFileStore`]), so there is at most one writer at a time and readers
//! never observe a partial update.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::HalachaError;

/// Key of the JSON override map `{markerId: opinionId}`.
pub const CUSTOM_OPINION_MAP_KEY: &str = "customOpinionMap";
/// Key of the profile selector string.
pub const PROFILE_KEY: &str = "halachicProfile";
/// Key of the candle-lighting offset in minutes.
pub const CANDLE_OFFSET_KEY: &str = "candleLightingOffset";

/// Persistent string key/value store.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String) -> Result<(), HalachaError>;
    fn remove(&self, key: &str) -> Result<(), HalachaError>;
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<(), HalachaError> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), HalachaError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object file, rewritten on every change.
///
/// Each rewrite goes to a sibling temp file that is then renamed over the
/// original, so the file on disk is always a complete JSON object.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HalachaError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(HalachaError::io(&path, e)),
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened preference file");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), HalachaError> {
        let text = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.temp_path();
        {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)
                .map_err(|e| HalachaError::io(&tmp_path, e))?;
            file.write_all(text.as_bytes())
                .map_err(|e| HalachaError::io(&tmp_path, e))?;
            file.sync_all().map_err(|e| HalachaError::io(&tmp_path, e))?;
        }

        // Atomic rename
        fs::rename(&tmp_path, &self.path).map_err(|e| HalachaError::io(&self.path, e))
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<(), HalachaError> {
        let mut entries = self.entries.write();
        let previous = entries.insert(key.to_string(), value);
        if let Err(e) = self.persist(&entries) {
            // Keep memory and file in agreement
            match previous {
                Some(v) => entries.insert(key.to_string(), v),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), HalachaError> {
        let mut entries = self.entries.write();
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.persist(&entries) {
            entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}
