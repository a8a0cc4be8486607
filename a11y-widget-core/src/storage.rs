//! Persistence adapter for [`Settings`].
//!
//! Storage is best effort: a read that fails for any reason looks like "no
//! saved settings", and a write that fails is logged and dropped.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::settings::Settings;

/// Key-value backend holding the serialized settings record.
/// Platform-specific implementations should provide this.
pub trait SettingsStorage {
    type Error: std::error::Error + 'static;

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum PersistError<E: std::error::Error + 'static> {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(#[source] E),
}

/// A storage backend bound to the configured key.
pub struct SettingsStore<S> {
    backend: S,
    key: String,
}

impl<S: SettingsStorage> SettingsStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored record, if there is a usable one.
    ///
    /// Missing keys, unreachable storage and malformed JSON all yield `None`.
    #[must_use]
    pub fn load(&self) -> Option<serde_json::Value> {
        let raw = match self.backend.read(&self.key) {
            Ok(raw) => raw?,
            Err(err) => {
                log::debug!("settings storage unreadable: {err}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("ignoring malformed settings under {}: {err}", self.key);
                None
            }
        }
    }

    /// Serialize and write `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when serialization or the backend write fails.
    pub fn try_save(&self, settings: &Settings) -> Result<(), PersistError<S::Error>> {
        let json = serde_json::to_string(settings)?;
        self.backend
            .write(&self.key, &json)
            .map_err(PersistError::Storage)
    }

    /// Write `settings`, logging and dropping any failure.
    pub fn save(&self, settings: &Settings) {
        if let Err(err) = self.try_save(settings) {
            log::warn!("A11Y: failed to save settings: {err}");
        }
    }
}

#[derive(Debug, Error)]
#[error("in-memory storage rejected the write")]
pub struct MemoryStorageError;

/// In-process backend. Clones share the same map, so a clone kept by a test
/// observes everything the widget writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the write counter.
    pub fn insert(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .entries
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }
}

impl SettingsStorage for MemoryStorage {
    type Error = MemoryStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(MemoryStorageError);
        }
        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}
