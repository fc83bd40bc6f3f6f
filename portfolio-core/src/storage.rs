//! Key/value persistence for visitor preferences
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Durable string key/value store backing the preference store.
/// Platform-specific implementations should provide this
pub trait PreferenceStorage {
    type Error: std::error::Error + 'static;

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryStorageError {
    #[error("memory storage is unavailable")]
    Unavailable,
}

/// In-memory storage for hosts without a browser.
///
/// Clones share the same entries, so a second store built from a clone
/// observes what the first one persisted (a "reload").
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose reads and writes always fail.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Storage pre-populated with raw entries.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::default();
        storage.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        storage
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PartialEq for MemoryStorage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries) && self.unavailable == other.unavailable
    }
}

impl PreferenceStorage for MemoryStorage {
    type Error = MemoryStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.unavailable {
            return Err(MemoryStorageError::Unavailable);
        }
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.unavailable {
            return Err(MemoryStorageError::Unavailable);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
