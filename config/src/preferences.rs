//! File-backed preference store.
//!
//! Preferences are a flat TOML table (`theme = "dark"`). Writes go through
//! [`folio_utils::atomic_write_with_options`] so a crash mid-write never leaves
//! a truncated file, and keys this process does not know about are preserved.

use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, warn};

use folio_engine::{PreferenceStore, StoreError};
use folio_utils::{
    AtomicWriteOptions, FileSyncPolicy, atomic_write_with_options, recover_bak_file,
};

use crate::folio_home;

const PREFERENCES_FILE: &str = "preferences.toml";

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `preferences.toml` in the Folio home, if a home can be determined.
    #[must_use]
    pub fn default_location() -> Option<Self> {
        folio_home().map(|home| Self::new(home.join(PREFERENCES_FILE)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<Table, StoreError> {
        recover_bak_file(&self.path);
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Table::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        toml::from_str::<Table>(&raw).map_err(|e| StoreError::Malformed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let table = self.read_table()?;
        match table.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(StoreError::Malformed {
                path: self.path.clone(),
                message: format!("`{key}` must be a string, found {}", other.type_str()),
            }),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut table = match self.read_table() {
            Ok(table) => table,
            Err(StoreError::Malformed { message, .. }) => {
                warn!(path = %self.path.display(), "Replacing malformed preference file: {message}");
                Table::new()
            }
            Err(e) => return Err(e),
        };
        table.insert(key.to_owned(), Value::String(value.to_owned()));

        let body = toml::to_string(&table).map_err(|e| StoreError::Malformed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        let options = AtomicWriteOptions {
            file_sync: FileSyncPolicy::SyncAll,
            create_parent: true,
        };
        atomic_write_with_options(&self.path, body.as_bytes(), options).map_err(|source| {
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!(path = %self.path.display(), key, value, "Saved preference");
        Ok(())
    }
}
