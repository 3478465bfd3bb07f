use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use log::info;

use crate::{
    config::{Config, StorageBackend},
    error::{CaptureError, CaptureResult},
    provider::{PokemonProvider, pokeapi::PokeApiClient},
    session::CaptureSession,
    storage::{KeyValueStore, file::FileStore, memory::MemoryStore},
};

/// Shared state handed to every request
pub struct Game {
    session: Mutex<CaptureSession>,
    store: Arc<dyn KeyValueStore>,
    pub provider: Arc<dyn PokemonProvider>,
    pub max_pokemon_id: u32,
}

impl Game {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        provider: Arc<dyn PokemonProvider>,
        max_pokemon_id: u32,
    ) -> Self {
        Self {
            session: Mutex::new(CaptureSession::new(store.clone())),
            store,
            provider,
            max_pokemon_id,
        }
    }

    /// Builds the store and the PokeAPI client described by the configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::File => {
                info!("Storing game data in {}", config.storage.path.display());
                Arc::new(FileStore::open(&config.storage.path)?)
            }
            StorageBackend::Memory => {
                info!("Storing game data in memory");
                Arc::new(MemoryStore::new())
            }
        };
        let provider = Arc::new(PokeApiClient::new(&config.provider)?);

        Ok(Self::new(store, provider, config.provider.max_pokemon_id))
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Locks the session. Never hold the guard across an `.await`.
    pub fn session(&self) -> CaptureResult<MutexGuard<'_, CaptureSession>> {
        self.session
            .lock()
            .map_err(|_| CaptureError::SessionPoisoned)
    }
}
