/// Client for the public PokeAPI
pub mod pokeapi;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::pokemon::Pokemon;

/// A freshly generated encounter: the Pokemon and whether it is shiny
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WildPokemon {
    pub pokemon: Pokemon,
    pub is_shiny: bool,
}

/// Supplies Pokemon for encounters
#[async_trait]
pub trait PokemonProvider: Send + Sync {
    /// Picks a random Pokemon and rolls its shiny flag
    async fn random_pokemon(&self) -> Result<WildPokemon>;

    /// Looks up a single Pokemon by national dex number
    async fn pokemon_by_id(&self, id: u32) -> Result<Pokemon>;
}
