//! Key-value persistence for tracker logs
//!
//! Each tracker owns one slot in a [`KeyValueStore`]. Logs are stored as a JSON
//! array of entries. Loading never fails: a missing or unreadable slot yields
//! an empty log.

use crate::migration::{self, LegacyLogRecord};
use crate::tracker::{SymptomLog, TrackerKind, local_date_today};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Synchronous string key-value slots
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if the slot is empty
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(content))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// In-process store, used by tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.lock().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Log persistence on top of a [`KeyValueStore`]
pub struct Storage {
    store: Box<dyn KeyValueStore>,
}

impl Storage {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// File-backed storage rooted at `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(FileStore::new(dir))
    }

    /// Load a tracker's log
    ///
    /// Records written by older clients are normalized; if any needed it, the
    /// normalized log is written back. Missing or malformed data gives an
    /// empty log.
    pub fn load_log(&self, kind: TrackerKind) -> SymptomLog {
        let key = kind.storage_key();
        let content = match self.store.load(key) {
            Ok(Some(content)) => content,
            Ok(None) => return SymptomLog::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "could not read log, starting empty");
                return SymptomLog::new();
            }
        };

        if content.trim().is_empty() {
            return SymptomLog::new();
        }

        let records: Vec<LegacyLogRecord> = match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed log data, starting empty");
                return SymptomLog::new();
            }
        };

        let (log, migrated) = migration::migrate_records(records, local_date_today());
        if migrated > 0 {
            tracing::info!(key, migrated, "normalized legacy log records");
            if let Err(e) = self.save_log(kind, &log) {
                tracing::warn!(key, error = %e, "could not write back normalized log");
            }
        }

        tracing::debug!(key, entries = log.len(), "loaded log");
        log
    }

    /// Persist a tracker's log
    pub fn save_log(&self, kind: TrackerKind, log: &SymptomLog) -> Result<()> {
        let content = serde_json::to_string_pretty(log).context("Failed to serialize log")?;
        self.store.save(kind.storage_key(), &content)?;
        Ok(())
    }
}
