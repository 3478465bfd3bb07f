//! PokeAPI client.
//!
//! A Pokemon takes two requests: `/pokemon/{id}` for sprites, types and stats,
//! then the species resource it links to for the capture rate.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::debug;
use rand::Rng;
use serde::{Deserialize, de::DeserializeOwned};

use super::{PokemonProvider, WildPokemon};
use crate::{
    capture::random::roll_shiny,
    config::ProviderConfig,
    pokemon::{Pokemon, Sprites, display_name, ptype::PokemonType, stats::PokemonStats},
};

#[derive(Deserialize, Debug, Clone)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedApiResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiStat {
    pub base_stat: u32,
    pub stat: NamedApiResource,
}

/// The subset of the `/pokemon/{id}` payload the game uses
#[derive(Deserialize, Debug, Clone)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    pub sprites: ApiSprites,
    pub types: Vec<ApiTypeSlot>,
    pub stats: Vec<ApiStat>,
    pub species: NamedApiResource,
}

/// The subset of the species payload the game uses
#[derive(Deserialize, Debug, Clone)]
pub struct ApiSpecies {
    pub capture_rate: u8,
}

impl ApiPokemon {
    fn base_stat(&self, name: &str) -> u32 {
        self.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
            .unwrap_or(0)
    }

    /// Builds the game's view of the Pokemon; missing stats count as 0
    pub fn into_pokemon(self, species: ApiSpecies) -> Pokemon {
        let stats = PokemonStats {
            hp: self.base_stat("hp"),
            attack: self.base_stat("attack"),
            defense: self.base_stat("defense"),
        };

        Pokemon {
            id: self.id,
            name: display_name(&self.name),
            sprites: Sprites {
                front_default: self.sprites.front_default,
                front_shiny: self.sprites.front_shiny,
            },
            types: self
                .types
                .iter()
                .map(|t| PokemonType::from_api_name(&t.kind.name))
                .collect(),
            stats,
            capture_rate: species.capture_rate,
        }
    }
}

/// HTTP client for PokeAPI
pub struct PokeApiClient {
    base_url: String,
    max_pokemon_id: u32,
    http_client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build PokeAPI HTTP client")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_pokemon_id: config.max_pokemon_id,
            http_client,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{} returned status {}", url, status));
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }

    /// Fetches a Pokemon and its species capture rate
    pub async fn fetch_pokemon(&self, id: u32) -> Result<Pokemon> {
        let pokemon: ApiPokemon = self
            .get_json(&format!("{}/pokemon/{}", self.base_url, id))
            .await
            .context("Pokemon not found")?;

        let species: ApiSpecies = self
            .get_json(&pokemon.species.url)
            .await
            .context("Species not found")?;

        Ok(pokemon.into_pokemon(species))
    }
}

#[async_trait]
impl PokemonProvider for PokeApiClient {
    async fn random_pokemon(&self) -> Result<WildPokemon> {
        let (id, is_shiny) = {
            let mut rng = rand::thread_rng();
            (rng.gen_range(1..=self.max_pokemon_id), roll_shiny(&mut rng))
        };

        let pokemon = self.fetch_pokemon(id).await?;
        Ok(WildPokemon { pokemon, is_shiny })
    }

    async fn pokemon_by_id(&self, id: u32) -> Result<Pokemon> {
        self.fetch_pokemon(id).await
    }
}
