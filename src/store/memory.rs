//! In-process preference store.

use std::collections::HashMap;

use super::ThemeStore;

/// A [`ThemeStore`] that lives only as long as the process.
///
/// Useful in tests and in hosts that deliberately run without durable
/// preferences; the engine behaves identically, it just starts fresh every
/// session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
