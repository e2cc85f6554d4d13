//! Data Store for GIFfire.
//!
//! Owns the durable `{favorites, recents}` document. Reads never fail: a
//! missing or corrupt file reads as the empty document. Writes replace the
//! whole file atomically and require a [`Loaded`] token, which is only handed
//! out by [`DataStoreTrait::load`], so nothing can overwrite the document
//! before it has been read once.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::platform;
use crate::types::errors::StoreError;
use crate::types::library::LauncherData;

/// Proof that the persisted document has been read.
#[derive(Debug)]
pub struct Loaded {
    _private: (),
}

/// Trait defining the persistence contract for the launcher document.
pub trait DataStoreTrait: Send + Sync {
    /// Returns the persisted document, or the empty document if there is none
    /// or it cannot be parsed.
    fn read(&self) -> LauncherData;

    /// Replaces the persisted document. Prefer [`DataStoreTrait::write`];
    /// this is the hook implementations provide.
    fn persist(&self, data: &LauncherData) -> Result<(), StoreError>;

    /// Reads the document and grants the right to write it back.
    fn load(&self) -> (LauncherData, Loaded) {
        (self.read(), Loaded { _private: () })
    }

    /// Replaces the persisted document with `data`.
    fn write(&self, _loaded: &Loaded, data: &LauncherData) -> Result<(), StoreError> {
        self.persist(data)
    }
}

/// JSON file implementation of [`DataStoreTrait`].
pub struct DataStore {
    path: PathBuf,
}

impl DataStore {
    /// Creates a store backed by `path_override`, or by the platform default
    /// `data.json` when `None`.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let path = path_override.unwrap_or_else(platform::default_data_file);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStoreTrait for DataStore {
    fn read(&self) -> LauncherData {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {:?} yet, starting empty", self.path);
                return LauncherData::default();
            }
            Err(e) => {
                warn!("Failed to read data file {:?}: {}", self.path, e);
                return LauncherData::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(data) => data,
            Err(e) => {
                warn!("Data file {:?} is not a valid document: {}", self.path, e);
                LauncherData::default()
            }
        }
    }

    fn persist(&self, data: &LauncherData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| {
            StoreError::IoError(format!("Failed to create data directory {:?}: {}", dir, e))
        })?;

        // Write next to the target and rename over it so a failed write never
        // leaves a truncated document behind.
        let mut tmp = NamedTempFile::new_in(&dir)
            .map_err(|e| StoreError::IoError(format!("Failed to create temp file: {}", e)))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| StoreError::IoError(format!("Failed to write data file: {}", e)))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::IoError(format!("Failed to replace data file: {}", e.error)))?;

        info!(
            "Saved {} favorites and {} recents to {:?}",
            data.favorites.len(),
            data.recents.len(),
            self.path
        );
        Ok(())
    }
}
