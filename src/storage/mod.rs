use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP endpoint for wiping saved data
pub mod endpoints;

/// Directory-backed store, one JSON file per key
pub mod file;

/// In-process store
pub mod memory;

/// Storage key of the team
pub const CAPTURED_KEY: &str = "captured_pokemon";

/// Storage key of the aggregate statistics
pub const STATS_KEY: &str = "game_stats";

/// Storage key of the discovery log
pub const POKEDEX_KEY: &str = "pokedex";

/// Storage key of the theme preference
pub const THEME_KEY: &str = "theme";

/// Every key the game writes
pub const RECORD_KEYS: [&str; 4] = [CAPTURED_KEY, STATS_KEY, POKEDEX_KEY, THEME_KEY];

/// A flat string key-value store
///
/// Writes to different keys are independent; nothing is atomic across keys.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key was never set
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Held for the whole of a record's read-modify-write
    fn update_lock(&self) -> &Mutex<()>;
}

/// A record stored as JSON under a fixed key
pub trait StoreRecord: Serialize + DeserializeOwned + Default {
    /// The key this record lives under
    const STORE_KEY: &'static str;

    /// Reads the record, or its default if it was never written
    fn load(store: &dyn KeyValueStore) -> Result<Self> {
        match store.get(Self::STORE_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Corrupt '{}' record", Self::STORE_KEY)),
            None => Ok(Self::default()),
        }
    }

    fn save(&self, store: &dyn KeyValueStore) -> Result<()> {
        let raw = serde_json::to_string(self)?;
        store.set(Self::STORE_KEY, raw)
    }

    /// Read-modify-write of the record. Concurrent updates on one store run one after another.
    fn update<R>(store: &dyn KeyValueStore, f: impl FnOnce(&mut Self) -> R) -> Result<R> {
        let _guard = store
            .update_lock()
            .lock()
            .map_err(|_| anyhow!("Store update lock poisoned"))?;
        let mut record = Self::load(store)?;
        let out = f(&mut record);
        record.save(store)?;
        Ok(out)
    }
}

/// Deletes every record the game owns
pub fn clear_all(store: &dyn KeyValueStore) -> Result<()> {
    for key in RECORD_KEYS {
        store.remove(key)?;
    }
    Ok(())
}
