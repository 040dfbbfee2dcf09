//! File-backed device store.
//!
//! The tactics board keeps its auxiliary state — opponent markers and saved
//! annotation lines — outside the players table, in a string-keyed JSON
//! store scoped to one device. Keys map to `<key>.json` files under a
//! configured directory. A missing key is the default/empty state, never an
//! error; a corrupt or unreadable file is.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CoreError;

/// Key for the opposing-formation markers blob.
pub const OPPONENTS_KEY: &str = "opponents-tactics";

/// Key for the saved annotation lines blob.
pub const SAVED_LINES_KEY: &str = "saved-lines";

/// String-keyed JSON store backed by one file per key.
#[derive(Debug, Clone)]
pub struct DeviceStore {
    dir: PathBuf,
}

impl DeviceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and deserialize the value under `key`. `Ok(None)` when the key
    /// has never been written.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CoreError> {
        let path = self.path_for(key);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(CoreError::Internal(format!(
                    "Failed to read device store key '{key}': {err}"
                )))
            }
        };
        let value = serde_json::from_str(&raw).map_err(|err| {
            CoreError::Internal(format!(
                "Device store key '{key}' holds malformed JSON: {err}"
            ))
        })?;
        Ok(Some(value))
    }

    /// Serialize and write `value` under `key`, creating the store directory
    /// on first use.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|err| {
            CoreError::Internal(format!("Failed to create device store directory: {err}"))
        })?;
        let raw = serde_json::to_string(value).map_err(|err| {
            CoreError::Internal(format!("Failed to serialize device store key '{key}': {err}"))
        })?;
        std::fs::write(self.path_for(key), raw).map_err(|err| {
            CoreError::Internal(format!(
                "Failed to write device store key '{key}': {err}"
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
