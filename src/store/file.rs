//! Durable preference store backed by a JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use super::error::StoreError;
use super::ThemeStore;

/// A [`ThemeStore`] persisted as a flat JSON object (`string -> string`) on
/// disk.
///
/// The whole map is loaded once when the store opens and rewritten
/// synchronously on every mutation, so a process that exits right after a
/// write leaves the new value behind. I/O failures are tolerated: the
/// in-memory map still updates for the session and a warning is logged.
///
/// # Example
///
/// ```rust
/// use themeset::{FileStore, ThemeStore};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut store = FileStore::at(dir.path().join("prefs.json"));
/// store.set("theme", "dark");
/// assert_eq!(store.get("theme"), Some("dark".to_string()));
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at the platform default location,
    /// `<config dir>/themeset/prefs.json`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoConfigDir`] when the platform reports no
    /// user configuration directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs_next::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::at(dir.join("themeset").join("prefs.json")))
    }

    /// Opens the store at an explicit path, loading any values already
    /// present there.
    ///
    /// A missing file is an empty store. An unreadable or malformed file is
    /// also an empty store; the file is left untouched until the first
    /// write and a warning is logged.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path);
        Self { path, values }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(
                    "preference store: could not create {}: {}",
                    parent.display(),
                    err
                );
                return;
            }
        }
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(err) => {
                warn!("preference store: could not encode values: {}", err);
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            warn!(
                "preference store: could not write {}: {}",
                self.path.display(),
                err
            );
        }
    }
}

fn load_values(path: &Path) -> BTreeMap<String, String> {
    if !path.exists() {
        return BTreeMap::new();
    }
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(
                "preference store: could not read {}: {}",
                path.display(),
                err
            );
            return BTreeMap::new();
        }
    };
    match serde_json::from_str(&contents) {
        Ok(values) => values,
        Err(err) => {
            warn!(
                "preference store: ignoring malformed {}: {}",
                path.display(),
                err
            );
            BTreeMap::new()
        }
    }
}

impl ThemeStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("prefs.json"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::at(dir.path().join("prefs.json"));

        store.set("theme", "dark");
        assert_eq!(store.get("theme"), Some("dark".to_string()));

        store.remove("theme");
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = FileStore::at(&path);
        store.set("theme", "light");
        store.set("customTheme", r##"{"primary":"#fff"}"##);
        drop(store);

        let reopened = FileStore::at(&path);
        assert_eq!(reopened.get("theme"), Some("light".to_string()));
        assert_eq!(
            reopened.get("customTheme"),
            Some(r##"{"primary":"#fff"}"##.to_string())
        );
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::at(dir.path().join("prefs.json"));
        store.remove("theme");
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FileStore::at(&path);
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_parent_dirs_created_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("prefs.json");

        let mut store = FileStore::at(&path);
        store.set("theme", "dark");
        assert!(path.exists());
    }
}
