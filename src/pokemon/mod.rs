/// Ball tiers and their multipliers
pub mod ball;

/// HTTP endpoints for looking up Pokemon
pub mod endpoints;

/// Pokemon Type module
pub mod ptype;

/// Pokemon Stats (hp, etc) module
pub mod stats;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use ball::BallType;
use ptype::PokemonType;
use stats::PokemonStats;

/// Sprite URLs for the normal and shiny forms of a Pokemon
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

/// Represents a Pokemon as it appears in an encounter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    /// National dex number
    pub id: u32,

    /// Display name, first letter capitalised
    pub name: String,

    /// Sprite references for both forms
    pub sprites: Sprites,

    /// The types of the Pokemon, order is irrelevant
    pub types: BTreeSet<PokemonType>,

    /// The base stats of the Pokemon
    pub stats: PokemonStats,

    /// Base capture rate, 3 (hardest) to 255 (easiest)
    pub capture_rate: u8,
}

impl Pokemon {
    /// The sprite to show for this Pokemon in the given form
    pub fn sprite(&self, shiny: bool) -> Option<&str> {
        if shiny {
            self.sprites.front_shiny.as_deref()
        } else {
            self.sprites.front_default.as_deref()
        }
    }
}

/// A Pokemon that was caught and placed on the team
///
/// Two captures of the same species are distinct entries, told apart by `capture_id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CapturedPokemon {
    #[serde(flatten)]
    pub pokemon: Pokemon,

    /// Unique identifier of this capture
    pub capture_id: String,

    pub is_shiny: bool,

    /// Unix timestamp of the capture, in milliseconds
    pub captured_at: i64,

    pub ball_used: BallType,
}

impl CapturedPokemon {
    /// Stamps a freshly caught Pokemon with a new capture id and the current time
    pub fn new(pokemon: Pokemon, is_shiny: bool, ball_used: BallType) -> Self {
        let captured_at = chrono::Utc::now().timestamp_millis();
        let capture_id = format!("{}-{:016x}", captured_at, rand::random::<u64>());

        Self {
            pokemon,
            capture_id,
            is_shiny,
            captured_at,
            ball_used,
        }
    }
}

/// Capitalises the first letter of a name coming from the data API
pub fn display_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
