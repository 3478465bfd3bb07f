use serde::{Deserialize, Serialize};

/// Represents the base stats of a Pokemon that matter for an encounter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct PokemonStats {
    /// The hit points of the Pokemon
    pub hp: u32,

    /// The attack power of the Pokemon
    pub attack: u32,

    /// The defense power of the Pokemon
    pub defense: u32,
}
