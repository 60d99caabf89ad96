use std::collections::HashMap;
use parking_lot::RwLock;
use super::KeyValueStore;

/// In-process store, used for the session tier
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.entries.write().remove(key);
    }
}
