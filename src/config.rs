use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use crate::constants::{MAX_POKEMON_ID, POKEAPI_BASE_URL};

/// Settings read from `config.toml`
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub storage: StorageConfig,
}

/// Where Pokemon data comes from
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub max_pokemon_id: u32,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_BASE_URL.to_string(),
            max_pokemon_id: MAX_POKEMON_ID,
            timeout_secs: 10,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per record under `path`
    #[default]
    File,
    /// Nothing survives a restart
    Memory,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            path: PathBuf::from("data"),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when the file does not exist
    pub fn load(path: &str) -> Result<Self> {
        if !std::path::Path::new(path).exists() {
            info!("No {} found, using default configuration", path);
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        Self::parse(&raw).with_context(|| format!("Invalid configuration in {}", path))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)?;

        if config.provider.max_pokemon_id == 0 {
            anyhow::bail!("provider.max_pokemon_id must be at least 1");
        }

        Ok(config)
    }
}
