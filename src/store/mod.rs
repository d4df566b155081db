//! Key-value preference storage surviving across sessions.
//!
//! This module provides:
//!
//! - [`ThemeStore`]: The storage contract the engine writes through
//! - [`FileStore`]: Durable store backed by a JSON file in the config dir
//! - [`MemoryStore`]: In-process store for tests and ephemeral sessions
//! - [`StoreError`]: The one fallible path (locating the config dir)
//!
//! Absence of a key is a valid state, never an error. Writes are
//! best-effort: a store that cannot reach its backing medium keeps the
//! session's values in memory and logs a warning.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Contract for persisted preference storage.
///
/// Implementations hold string values under string keys. The engine uses
/// two keys: `"theme"` for the active mode and `"customTheme"` for the
/// JSON-encoded custom color bundle.
pub trait ThemeStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Removes the value stored under `key`. Removing an absent key is a
    /// no-op.
    fn remove(&mut self, key: &str);
}
