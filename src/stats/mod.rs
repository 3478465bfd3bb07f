/// HTTP endpoints for statistics
pub mod endpoints;

use serde::{Deserialize, Serialize};

use crate::{
    constants::SHINY_ODDS,
    pokemon::ball::BallType,
    storage::{STATS_KEY, StoreRecord},
};

/// How many balls of each tier were thrown
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BallsUsed {
    pub poke: u64,
    pub great: u64,
    pub ultra: u64,
}

impl BallsUsed {
    pub fn get(&self, ball: BallType) -> u64 {
        match ball {
            BallType::Poke => self.poke,
            BallType::Great => self.great,
            BallType::Ultra => self.ultra,
        }
    }

    fn slot(&mut self, ball: BallType) -> &mut u64 {
        match ball {
            BallType::Poke => &mut self.poke,
            BallType::Great => &mut self.great,
            BallType::Ultra => &mut self.ultra,
        }
    }

    pub fn total(&self) -> u64 {
        BallType::ALL.iter().map(|ball| self.get(*ball)).sum()
    }
}

/// Aggregate counters over the whole save
///
/// Counters only ever go up.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub total_encounters: u64,
    pub total_captures: u64,
    pub total_escapes: u64,
    pub shiny_encounters: u64,
    pub shiny_captured: u64,
    pub balls_used: BallsUsed,
}

impl StoreRecord for GameStats {
    const STORE_KEY: &'static str = STATS_KEY;
}

/// A single counter of `GameStats`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatCounter {
    Encounter,
    Capture,
    Escape,
    ShinyEncounter,
    ShinyCapture,
    Ball(BallType),
}

impl GameStats {
    pub fn increment(&mut self, counter: StatCounter) {
        let slot = match counter {
            StatCounter::Encounter => &mut self.total_encounters,
            StatCounter::Capture => &mut self.total_captures,
            StatCounter::Escape => &mut self.total_escapes,
            StatCounter::ShinyEncounter => &mut self.shiny_encounters,
            StatCounter::ShinyCapture => &mut self.shiny_captured,
            StatCounter::Ball(ball) => self.balls_used.slot(ball),
        };
        *slot = slot.saturating_add(1);
    }

    /// Derived figures shown on the stats page
    pub fn summary(&self) -> StatsSummary {
        let capture_rate = percent(self.total_captures, self.total_encounters);
        let shiny_capture_rate = percent(self.shiny_captured, self.shiny_encounters);

        // observed shiny odds, "one in N encounters"
        let shiny_one_in = if self.shiny_encounters > 0 {
            (self.total_encounters as f64 / self.shiny_encounters as f64).round() as u64
        } else {
            0
        };

        StatsSummary {
            stats: *self,
            capture_rate,
            shiny_capture_rate,
            shiny_one_in,
            lucky: self.shiny_encounters > 0 && shiny_one_in < SHINY_ODDS as u64,
            total_balls: self.balls_used.total(),
        }
    }
}

/// Percentage rounded to one decimal, 0 when there is nothing to divide by
fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 1000.0).round() / 10.0
}

/// Raw counters plus derived rates
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    #[serde(flatten)]
    pub stats: GameStats,
    /// Captures per encounter, in percent
    pub capture_rate: f64,
    /// Shiny captures per shiny encounter, in percent
    pub shiny_capture_rate: f64,
    /// Encounters per shiny seen, 0 before the first shiny
    pub shiny_one_in: u64,
    /// Shinies are showing up more often than the base odds
    pub lucky: bool,
    pub total_balls: u64,
}
