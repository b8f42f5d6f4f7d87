//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{CartStorage, StorageError};

/// In-memory key-value storage.
///
/// Backs tests and embedded use where nothing should touch disk. Beyond
/// the plain map it tracks successful write counts and supports a
/// one-shot injected write failure, so tests can assert exactly how the
/// store drives its backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
    fail_next_set: AtomicBool,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make the next `set` call fail with a backend error. One-shot.
    pub fn fail_next_set(&self) {
        self.fail_next_set.store(true, Ordering::SeqCst);
    }

    /// Read a stored value synchronously, bypassing the trait.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        #[allow(clippy::unwrap_used)]
        let entries = self.entries.lock().unwrap();
        entries.get(key).cloned()
    }

    /// Seed a value synchronously, bypassing the trait.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn seed(&self, key: &str, value: &str) {
        #[allow(clippy::unwrap_used)]
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl CartStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_next_set.swap(false, Ordering::SeqCst) {
            return Err(StorageError::Backend("injected write failure".to_string()));
        }

        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
