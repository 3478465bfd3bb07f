use serde::{Deserialize, Serialize};

use crate::pokemon::ball::BallType;

/// Represents something that happened during a throw
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "event_name", content = "event_data")]
pub enum CaptureEvent {
    /// A ball is thrown at the wild Pokemon
    Throw {
        /// The ball that was thrown
        ball: BallType,
        /// 1-based number of this throw within the encounter
        attempt: u8,
    },
    /// The ball shakes once
    Shake {
        /// 1-based shake number
        number: u8,
    },
    /// The Pokemon broke out of the ball but is still around
    BrokeFree {
        /// The name of the Pokemon
        pokemon: String,
        /// The shake it broke out on
        shake: u8,
        /// Throws left in this encounter
        attempts_left: u8,
    },
    /// The Pokemon was caught
    Caught {
        /// The name of the Pokemon
        pokemon: String,
        /// The id of the new team entry
        capture_id: String,
        shiny: bool,
    },
    /// The Pokemon broke out on the last throw and left
    Fled {
        /// The name of the Pokemon
        pokemon: String,
        shiny: bool,
    },
}

/// Represents the log of a single throw
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CaptureLog {
    pub pokemon_name: String,
    pub ball: BallType,
    /// Chance per shake, as displayed to the player
    pub chance: u8,
    pub log: Vec<CaptureEvent>,
}

impl CaptureLog {
    pub fn new(pokemon_name: String, ball: BallType, chance: u8) -> Self {
        Self {
            pokemon_name,
            ball,
            chance,
            log: vec![],
        }
    }

    pub fn push(&mut self, event: CaptureEvent) {
        self.log.push(event);
    }
}
