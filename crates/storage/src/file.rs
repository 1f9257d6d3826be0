//! File-backed store.
//!
//! Entries live in a single JSON object file:
//!
//! ```json
//! {
//!   "name": "{\"a\":\"123\"}",
//!   "theme": "\"dark\""
//! }
//! ```
//!
//! The whole file is loaded at open and rewritten on every change through a
//! temp file and rename, so readers never observe a half-written file.

use crate::options::{usage, StoreOptions};
use keepcell_core::{StorageError, StorageResult, Store};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Durable store persisted as a JSON object file.
///
/// # Example
///
/// ```ignore
/// use keepcell_storage::{FileStore, StoreOptions, DurabilityMode};
///
/// let store = FileStore::open_with(
///     "./.keepcell.json",
///     StoreOptions::new().durability(DurabilityMode::Strict),
/// )?;
/// store.set("name", r#"{"a":"bob"}"#)?;
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
    options: StoreOptions,
}

impl FileStore {
    /// Open the store at `path` with default options.
    ///
    /// A missing file is an empty store; it is created on the first write.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Self::open_with(path, StoreOptions::default())
    }

    /// Open the store at `path` with explicit options.
    ///
    /// Fails with [`StorageError::Corruption`] if the file exists but is not a
    /// JSON object of strings.
    pub fn open_with(path: impl AsRef<Path>, options: StoreOptions) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = load(&path)?;
        debug!(
            path = %path.display(),
            entries = entries.len(),
            durability = options.durability.description(),
            "opened file store"
        );
        Ok(Self {
            path,
            entries: Mutex::new(entries),
            options,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Options this store was opened with.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Get number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let text = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Corruption(e.to_string()))?;
        let tmp = tmp_path(&self.path);
        let written = write_file(&tmp, text.as_bytes(), self.options.durability.requires_fsync())
            .and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.options.check_writable(key)?;
        let mut entries = self.entries.lock();
        if self.options.quota.is_some() {
            let current = usage(entries.iter());
            self.options
                .check_quota(current, key, entries.get(key).map(String::as_str), value)?;
        }

        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist(&entries) {
            warn!(path = %self.path.display(), key, error = %e, "write failed, rolling back");
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.options.check_writable(key)?;
        let mut entries = self.entries.lock();
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.persist(&entries) {
            warn!(path = %self.path.display(), key, error = %e, "remove failed, rolling back");
            entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}

fn load(path: &Path) -> StorageResult<BTreeMap<String, String>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no store file yet, starting empty");
            return Ok(BTreeMap::new());
        }
        Err(e) => return Err(e.into()),
    };
    if text.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(&text).map_err(|e| {
        warn!(path = %path.display(), error = %e, "store file is not a JSON object of strings");
        StorageError::Corruption(format!("{}: {}", path.display(), e))
    })
}

fn write_file(path: &Path, bytes: &[u8], fsync: bool) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    if fsync {
        file.sync_all()?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
