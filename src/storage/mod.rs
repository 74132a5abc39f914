//! Persistence of history and memory across sessions.
//!
//! Values live in a key-value [`Store`] of strings. History is stored as a
//! JSON list under [`HISTORY_KEY`], memory as a decimal string under
//! [`MEMORY_KEY`]. Loading never fails: absent or malformed data falls back
//! to an empty log and a zero register.

use crate::core::{HistoryLog, MemoryRegister};
use std::collections::HashMap;
use tracing::warn;

pub mod error;
mod file;

pub use error::StorageError;
pub use file::FileStore;

/// Key of the serialized history list
pub const HISTORY_KEY: &str = "calculator_history";

/// Key of the memory register
pub const MEMORY_KEY: &str = "calculator_memory";

/// String key-value storage surviving process restarts.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Volatile store, for tests and for running without a data directory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Read the history log, or an empty one if it is missing or unreadable.
pub fn load_history(store: &impl Store) -> HistoryLog {
    match read_history(store) {
        Ok(history) => history,
        Err(e) => {
            warn!(error = %e, "discarding unreadable history");
            HistoryLog::new()
        }
    }
}

fn read_history(store: &impl Store) -> Result<HistoryLog, StorageError> {
    let Some(json) = store.get(HISTORY_KEY)? else {
        return Ok(HistoryLog::new());
    };
    let entries =
        serde_json::from_str(&json).map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;
    Ok(HistoryLog::from_entries(entries))
}

/// Write the full history log.
pub fn save_history(store: &mut impl Store, history: &HistoryLog) -> Result<(), StorageError> {
    let json = serde_json::to_string(history)
        .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
    store.set(HISTORY_KEY, &json)
}

/// Remove the persisted history.
pub fn clear_history(store: &mut impl Store) -> Result<(), StorageError> {
    store.remove(HISTORY_KEY)
}

/// Read the memory register, or zero if it is missing or unreadable.
pub fn load_memory(store: &impl Store) -> MemoryRegister {
    match store.get(MEMORY_KEY) {
        Ok(Some(value)) => MemoryRegister::parse(&value),
        Ok(None) => MemoryRegister::default(),
        Err(e) => {
            warn!(error = %e, "discarding unreadable memory");
            MemoryRegister::default()
        }
    }
}

/// Write the memory register as a decimal string.
pub fn save_memory(store: &mut impl Store, memory: MemoryRegister) -> Result<(), StorageError> {
    store.set(MEMORY_KEY, &memory.to_string())
}
