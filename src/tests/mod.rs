mod provider;
mod records;
mod storage;

use std::{collections::VecDeque, sync::Arc, sync::Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::{
    game::Game,
    pokemon::{Pokemon, Sprites, ptype::PokemonType, stats::PokemonStats},
    provider::{PokemonProvider, WildPokemon},
    storage::memory::MemoryStore,
};

/// Builds a Pokemon with the given dex number and capture rate
pub fn sample_pokemon(id: u32, capture_rate: u8) -> Pokemon {
    Pokemon {
        id,
        name: format!("Pokemon{}", id),
        sprites: Sprites {
            front_default: Some(format!("https://sprites.test/{}.png", id)),
            front_shiny: Some(format!("https://sprites.test/shiny/{}.png", id)),
        },
        types: [PokemonType::Normal].into_iter().collect(),
        stats: PokemonStats {
            hp: 50,
            attack: 50,
            defense: 50,
        },
        capture_rate,
    }
}

pub fn pikachu() -> Pokemon {
    Pokemon {
        id: 25,
        name: "Pikachu".to_string(),
        sprites: Sprites {
            front_default: Some("https://sprites.test/25.png".to_string()),
            front_shiny: Some("https://sprites.test/shiny/25.png".to_string()),
        },
        types: [PokemonType::Electric].into_iter().collect(),
        stats: PokemonStats {
            hp: 35,
            attack: 55,
            defense: 40,
        },
        capture_rate: 190,
    }
}

pub fn wild(pokemon: Pokemon, is_shiny: bool) -> WildPokemon {
    WildPokemon { pokemon, is_shiny }
}

/// Hands out queued Pokemon; `None` entries and an empty queue are lookup failures
pub struct StaticProvider {
    queue: Mutex<VecDeque<Option<WildPokemon>>>,
}

impl StaticProvider {
    pub fn new(queue: Vec<Option<WildPokemon>>) -> Self {
        Self {
            queue: Mutex::new(queue.into()),
        }
    }
}

#[async_trait]
impl PokemonProvider for StaticProvider {
    async fn random_pokemon(&self) -> Result<WildPokemon> {
        let next = self.queue.lock().unwrap().pop_front();
        match next {
            Some(Some(wild)) => Ok(wild),
            _ => Err(anyhow!("Pokemon data unavailable")),
        }
    }

    async fn pokemon_by_id(&self, id: u32) -> Result<Pokemon> {
        Ok(sample_pokemon(id, 45))
    }
}

/// A game on an in-memory store with a scripted provider
pub fn test_game(queue: Vec<Option<WildPokemon>>) -> (Game, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let game = Game::new(store.clone(), Arc::new(StaticProvider::new(queue)), 898);
    (game, store)
}

/// Test if rocket can be built
#[test]
fn test_rocket() {
    let (game, _) = test_game(vec![]);
    let _rocket = crate::build_rocket(game);
    // no panic = success
}
