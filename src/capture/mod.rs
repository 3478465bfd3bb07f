/// HTTP endpoints for encounters and throws
pub mod endpoints;

/// The state of one in-progress encounter
pub mod encounter;

/// Event log of a throw, replayed by the frontend
pub mod events;

/// Random sources for shakes and shiny rolls
pub mod random;

use serde::{Deserialize, Serialize};

use crate::constants::{CAPTURE_RATE_SCALE, SHAKES_PER_THROW, STATUS_MULTIPLIER_NONE};
use crate::pokemon::{Pokemon, ball::BallType};
use random::ShakeRoll;

/// Inputs of the capture formula
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureFactors {
    pub max_hp: u32,
    pub current_hp: u32,
    pub capture_rate: u8,
    pub ball_multiplier: f64,
    pub status_multiplier: f64,
}

impl CaptureFactors {
    /// Factors for a full-health Pokemon with no status condition
    pub fn new(pokemon: &Pokemon, ball: BallType) -> Self {
        Self {
            max_hp: pokemon.stats.hp,
            // no damage model, so the Pokemon is always at full health
            current_hp: pokemon.stats.hp,
            capture_rate: pokemon.capture_rate,
            ball_multiplier: ball.multiplier(),
            status_multiplier: STATUS_MULTIPLIER_NONE,
        }
    }

    /// `(3 * max - 2 * current) / max`: 1 at full health, 3 at 0 hp.
    fn health_factor(&self) -> f64 {
        if self.max_hp == 0 {
            return 1.0;
        }
        let max = self.max_hp as f64;
        let current = self.current_hp.min(self.max_hp) as f64;
        (3.0 * max - 2.0 * current) / max
    }

    /// Capture score before normalisation
    pub fn score(&self) -> f64 {
        self.health_factor()
            * self.capture_rate as f64
            * self.ball_multiplier
            * self.status_multiplier
    }

    /// Probability in percent that a single shake holds, within `[0, 100]`
    pub fn chance(&self) -> f64 {
        let chance = (self.score() / CAPTURE_RATE_SCALE) * 100.0;
        if chance.is_nan() {
            return 0.0;
        }
        chance.clamp(0.0, 100.0)
    }
}

/// Chance in percent that one shake holds for this Pokemon and ball
pub fn capture_chance(pokemon: &Pokemon, ball: BallType) -> f64 {
    CaptureFactors::new(pokemon, ball).chance()
}

/// The chance as shown to the player, rounded to a whole percent
pub fn display_chance(chance: f64) -> u8 {
    chance.round().clamp(0.0, 100.0) as u8
}

/// Result of one shake
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ShakeCheck {
    /// 1-based index of the shake
    pub number: u8,
    /// The roll drawn for this shake
    pub roll: f64,
    pub held: bool,
}

/// Runs a single shake: it holds when the roll does not exceed the chance
pub fn check_shake(number: u8, chance: f64, rolls: &mut dyn ShakeRoll) -> ShakeCheck {
    let roll = rolls.roll();
    ShakeCheck {
        number,
        roll,
        held: roll <= chance,
    }
}

/// Outcome of the shakes of one throw
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShakeSequence {
    pub chance: f64,
    pub shakes: Vec<ShakeCheck>,
}

impl ShakeSequence {
    /// All shakes ran and held
    pub fn caught(&self) -> bool {
        self.shakes.len() == SHAKES_PER_THROW as usize && self.shakes.iter().all(|s| s.held)
    }

    /// The shake the Pokemon broke out on, if any
    pub fn broke_free_on(&self) -> Option<u8> {
        self.shakes.iter().find(|s| !s.held).map(|s| s.number)
    }
}

/// Runs up to three shakes, stopping at the first that fails
pub fn resolve_shakes(chance: f64, rolls: &mut dyn ShakeRoll) -> ShakeSequence {
    let mut shakes = Vec::with_capacity(SHAKES_PER_THROW as usize);

    for number in 1..=SHAKES_PER_THROW {
        let check = check_shake(number, chance, rolls);
        shakes.push(check);
        if !check.held {
            break;
        }
    }

    ShakeSequence { chance, shakes }
}

/// Terminal result of one throw
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaptureOutcome {
    Captured,
    /// Broke free, the same Pokemon can be targeted again
    Escaped { attempts_left: u8 },
    /// Broke free on the last throw and left for good
    Fled,
}

impl CaptureOutcome {
    /// Verdict of a throw given the attempts left after it was consumed
    pub fn from_sequence(sequence: &ShakeSequence, attempts_left: u8) -> Self {
        if sequence.caught() {
            CaptureOutcome::Captured
        } else if attempts_left == 0 {
            CaptureOutcome::Fled
        } else {
            CaptureOutcome::Escaped { attempts_left }
        }
    }
}
