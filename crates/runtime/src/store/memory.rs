//! In-memory ScoreStore implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{ScoreStore, StoreError};

/// In-memory implementation of [`ScoreStore`].
///
/// Durable only for the lifetime of the process. Used in tests and as a
/// fallback when no writable data directory is available.
#[derive(Default)]
pub struct MemoryScoreStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().expect("score store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("score store lock poisoned");
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("score store lock poisoned");
        entries.remove(key);
        Ok(())
    }
}
