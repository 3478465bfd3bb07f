/// HTTP endpoints for the pokedex
pub mod endpoints;

use std::{collections::BTreeSet, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::CaptureError,
    pokemon::{CapturedPokemon, ptype::PokemonType},
    storage::{POKEDEX_KEY, StoreRecord},
};

/// What the player knows about one species
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PokedexEntry {
    pub id: u32,
    pub name: String,
    pub capture_count: u32,
    pub shiny_count: u32,
    /// Unix millis of the first capture of this species
    pub first_captured: i64,
    pub sprite: Option<String>,
    pub types: BTreeSet<PokemonType>,
}

/// Every species ever captured, one entry each
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Pokedex {
    entries: Vec<PokedexEntry>,
}

impl StoreRecord for Pokedex {
    const STORE_KEY: &'static str = POKEDEX_KEY;
}

/// Which entries to list
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PokedexFilter {
    #[default]
    All,
    /// Species caught at least once as shiny
    Shiny,
}

/// Ordering of listed entries
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PokedexSort {
    /// Dex number, ascending
    #[default]
    Id,
    /// Most captured first
    Captures,
    /// Most recently discovered first
    Date,
}

impl FromStr for PokedexFilter {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PokedexFilter::All),
            "shiny" => Ok(PokedexFilter::Shiny),
            _ => Err(CaptureError::InvalidQuery(format!("filter={}", s))),
        }
    }
}

impl FromStr for PokedexSort {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(PokedexSort::Id),
            "captures" => Ok(PokedexSort::Captures),
            "date" => Ok(PokedexSort::Date),
            _ => Err(CaptureError::InvalidQuery(format!("sort={}", s))),
        }
    }
}

impl Pokedex {
    pub fn entries(&self) -> &[PokedexEntry] {
        &self.entries
    }

    pub fn entry(&self, id: u32) -> Option<&PokedexEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Registers a capture, creating the species entry on first sight
    pub fn record_capture(&mut self, captured: &CapturedPokemon) {
        let shiny = u32::from(captured.is_shiny);

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.id == captured.pokemon.id)
        {
            entry.capture_count += 1;
            entry.shiny_count += shiny;
            return;
        }

        self.entries.push(PokedexEntry {
            id: captured.pokemon.id,
            name: captured.pokemon.name.clone(),
            capture_count: 1,
            shiny_count: shiny,
            first_captured: captured.captured_at,
            sprite: captured.pokemon.sprite(false).map(str::to_string),
            types: captured.pokemon.types.clone(),
        });
    }

    /// Entries matching `filter`, ordered by `sort`
    pub fn list(&self, filter: PokedexFilter, sort: PokedexSort) -> Vec<PokedexEntry> {
        let mut entries: Vec<PokedexEntry> = self
            .entries
            .iter()
            .filter(|e| match filter {
                PokedexFilter::All => true,
                PokedexFilter::Shiny => e.shiny_count > 0,
            })
            .cloned()
            .collect();

        match sort {
            PokedexSort::Id => entries.sort_by_key(|e| e.id),
            PokedexSort::Captures => entries.sort_by(|a, b| b.capture_count.cmp(&a.capture_count)),
            PokedexSort::Date => entries.sort_by(|a, b| b.first_captured.cmp(&a.first_captured)),
        }

        entries
    }

    /// Number of species with at least one shiny capture
    pub fn shiny_species(&self) -> usize {
        self.entries.iter().filter(|e| e.shiny_count > 0).count()
    }
}
