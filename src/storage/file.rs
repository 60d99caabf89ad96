use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use parking_lot::Mutex;
use tracing::{debug, warn};
use crate::error::StorageError;
use super::KeyValueStore;

/// Persistent store backed by a JSON object on disk.
///
/// The whole file is rewritten after every mutation. Write failures are
/// logged and the in-memory view stays authoritative for this process.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store, creating it empty if the file does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let path_str = path.display().to_string();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| StorageError::Json {
                path: path_str,
                source: e,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Store {} not found, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                return Err(StorageError::Io {
                    path: path_str,
                    source: e,
                })
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) {
        let result = serde_json::to_string_pretty(entries)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(&self.path, json).map_err(|e| e.to_string()));

        if let Err(e) = result {
            warn!("Failed to write store {}: {e}", self.path.display());
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries);
    }

    fn remove_item(&self, key: &str) {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.flush(&entries);
        }
    }
}
