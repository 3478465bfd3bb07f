use serde::{Deserialize, Serialize};

use super::{CaptureOutcome, ShakeSequence, capture_chance, random::ShakeRoll, resolve_shakes};
use crate::{
    constants::MAX_THROW_ATTEMPTS,
    error::{CaptureError, CaptureResult},
    pokemon::{Pokemon, ball::BallType},
    provider::WildPokemon,
};

/// A wild Pokemon being targeted, with the throws left against it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Encounter {
    pub pokemon: Pokemon,

    /// Rolled when the Pokemon appeared, never re-rolled
    is_shiny: bool,

    ball: BallType,

    attempts_left: u8,

    /// Shakes that held during the current throw
    shakes: u8,
}

/// One resolved throw
#[derive(Clone, Debug, PartialEq)]
pub struct Attempt {
    pub ball: BallType,
    pub sequence: ShakeSequence,
    pub outcome: CaptureOutcome,
}

impl Encounter {
    pub fn new(wild: WildPokemon) -> Self {
        Self {
            pokemon: wild.pokemon,
            is_shiny: wild.is_shiny,
            ball: BallType::default(),
            attempts_left: MAX_THROW_ATTEMPTS,
            shakes: 0,
        }
    }

    pub fn is_shiny(&self) -> bool {
        self.is_shiny
    }

    pub fn ball(&self) -> BallType {
        self.ball
    }

    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    pub fn shakes(&self) -> u8 {
        self.shakes
    }

    /// Chance in percent that one shake holds with the selected ball
    pub fn capture_chance(&self) -> f64 {
        capture_chance(&self.pokemon, self.ball)
    }

    pub fn select_ball(&mut self, ball: BallType) {
        self.ball = ball;
    }

    /// Takes one throw off the budget. Fails once the budget is spent.
    fn consume_attempt(&mut self) -> CaptureResult<u8> {
        if self.attempts_left == 0 {
            return Err(CaptureError::AttemptsExhausted);
        }
        self.attempts_left -= 1;
        self.shakes = 0;
        Ok(self.attempts_left)
    }

    /// Consumes a throw and resolves it in one step
    pub fn throw(&mut self, rolls: &mut dyn ShakeRoll) -> CaptureResult<Attempt> {
        let attempts_left = self.consume_attempt()?;
        let sequence = resolve_shakes(self.capture_chance(), rolls);
        let outcome = CaptureOutcome::from_sequence(&sequence, attempts_left);

        // the counter drops back to zero once the Pokemon breaks free
        if sequence.caught() {
            self.shakes = sequence.shakes.len() as u8;
        }

        Ok(Attempt {
            ball: self.ball,
            sequence,
            outcome,
        })
    }
}
