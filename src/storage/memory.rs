use std::{collections::HashMap, sync::Mutex};

use anyhow::{Result, anyhow};

use super::KeyValueStore;

/// Keeps every record in memory
#[derive(Default, Debug)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, String>>,
    updates: Mutex<()>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_map<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> Result<T> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| anyhow!("Memory store lock poisoned"))?;
        Ok(f(&mut map))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_map(|map| map.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.with_map(|map| {
            map.insert(key.to_string(), value);
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.with_map(|map| {
            map.remove(key);
        })
    }

    fn update_lock(&self) -> &Mutex<()> {
        &self.updates
    }
}
