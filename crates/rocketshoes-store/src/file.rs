//! # File Store
//!
//! Durable key/value storage: one file per key inside a data directory.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  data_dir/                                                              │
//! │  └── %40RocketShoes%3Acart.json   ◄── key "@RocketShoes:cart"          │
//! │                                                                         │
//! │  Bytes outside [A-Za-z0-9._-] are %XX-escaped, so any key maps to a     │
//! │  single portable file name and two keys never share a file.            │
//! │                                                                         │
//! │  Writes go to a temp file in data_dir and are renamed over the target,  │
//! │  so a crash mid-write leaves the previous value intact. A failed        │
//! │  rename removes the temp file.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Default Location
//! - **macOS**: `~/Library/Application Support/com.rocketshoes.storefront/`
//! - **Windows**: `%APPDATA%\rocketshoes\storefront\data\`
//! - **Linux**: `~/.local/share/storefront/`

use directories::ProjectDirs;
use std::fmt::Write as _;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::{validate_key, KeyValueStore};

/// Key/value storage persisted under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `data_dir`, creating the directory if needed.
    pub fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .map_err(|e| StoreError::io(data_dir.display().to_string(), e))?;

        info!(data_dir = %data_dir.display(), "File store opened");
        Ok(FileStore { data_dir })
    }

    /// Opens a store in the platform data directory.
    pub fn open_default() -> StoreResult<Self> {
        Self::open(Self::default_dir()?)
    }

    /// Platform data directory for the storefront.
    pub fn default_dir() -> StoreResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "rocketshoes", "storefront")
            .ok_or(StoreError::DataDirUnavailable)?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", encode_key(key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        let path = self.path_for(key);

        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!(key = %key, bytes = value.len(), "Read stored value");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;
        let path = self.path_for(key);

        let mut tmp = NamedTempFile::new_in(&self.data_dir).map_err(|e| StoreError::io(key, e))?;
        tmp.write_all(value.as_bytes()).map_err(|e| StoreError::io(key, e))?;
        // On failure the returned handle is dropped, which deletes the temp file.
        tmp.persist(&path).map_err(|e| StoreError::io(key, e.error))?;

        debug!(key = %key, bytes = value.len(), path = %path.display(), "Stored value");
        Ok(())
    }
}

/// Escapes a key into a file-name-safe string.
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-') {
            encoded.push(byte as char);
        } else {
            // Writing into a String cannot fail
            let _ = write!(encoded, "%{:02X}", byte);
        }
    }
    encoded
}
