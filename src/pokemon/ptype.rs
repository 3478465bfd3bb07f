use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Represents the elemental type of a Pokemon
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
    /// Anything the data source reports that is not one of the above
    Unknown,
}

impl PokemonType {
    /// The lowercase name used by the data API
    pub fn as_str(&self) -> &'static str {
        match self {
            PokemonType::Normal => "normal",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Electric => "electric",
            PokemonType::Grass => "grass",
            PokemonType::Ice => "ice",
            PokemonType::Fighting => "fighting",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Flying => "flying",
            PokemonType::Psychic => "psychic",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Fairy => "fairy",
            PokemonType::Unknown => "unknown",
        }
    }

    /// Parses a type name, falling back to `Unknown` for names outside the 18 canonical types
    pub fn from_api_name(name: &str) -> Self {
        name.parse().unwrap_or(PokemonType::Unknown)
    }
}

impl FromStr for PokemonType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(PokemonType::Normal),
            "fire" => Ok(PokemonType::Fire),
            "water" => Ok(PokemonType::Water),
            "electric" => Ok(PokemonType::Electric),
            "grass" => Ok(PokemonType::Grass),
            "ice" => Ok(PokemonType::Ice),
            "fighting" => Ok(PokemonType::Fighting),
            "poison" => Ok(PokemonType::Poison),
            "ground" => Ok(PokemonType::Ground),
            "flying" => Ok(PokemonType::Flying),
            "psychic" => Ok(PokemonType::Psychic),
            "bug" => Ok(PokemonType::Bug),
            "rock" => Ok(PokemonType::Rock),
            "ghost" => Ok(PokemonType::Ghost),
            "dragon" => Ok(PokemonType::Dragon),
            "dark" => Ok(PokemonType::Dark),
            "steel" => Ok(PokemonType::Steel),
            "fairy" => Ok(PokemonType::Fairy),
            "unknown" => Ok(PokemonType::Unknown),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
