/// HTTP endpoints for the team
pub mod endpoints;

use serde::{Deserialize, Serialize};

use crate::{
    constants::MAX_CAPTURED,
    pokemon::CapturedPokemon,
    storage::{CAPTURED_KEY, StoreRecord},
};

/// The captured Pokemon, in capture order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Team {
    members: Vec<CapturedPokemon>,
}

impl StoreRecord for Team {
    const STORE_KEY: &'static str = CAPTURED_KEY;
}

impl Team {
    pub fn members(&self) -> &[CapturedPokemon] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// No room for another capture
    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_CAPTURED
    }

    /// Adds a capture. Capacity is checked before a throw, not here.
    pub fn add(&mut self, pokemon: CapturedPokemon) {
        self.members.push(pokemon);
    }

    /// Removes the capture with the given id
    pub fn release(&mut self, capture_id: &str) -> Option<CapturedPokemon> {
        let idx = self
            .members
            .iter()
            .position(|p| p.capture_id == capture_id)?;
        Some(self.members.remove(idx))
    }
}
