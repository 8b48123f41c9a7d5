//! Key-value preference storage seam.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("failed to read preferences from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write preferences to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed preference file {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },
}

/// Durable string-keyed storage scoped to the user's environment.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Session-only storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Storage that fails every call, e.g. when no home directory can be found.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}
