use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaptureError;

/// The tier of ball thrown at a wild Pokemon
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BallType {
    /// Multiplier 1
    #[default]
    Poke,
    /// Multiplier 1.5
    Great,
    /// Multiplier 2
    Ultra,
}

impl BallType {
    /// Every ball tier, weakest first
    pub const ALL: [BallType; 3] = [BallType::Poke, BallType::Great, BallType::Ultra];

    /// Effectiveness multiplier applied to the capture score
    pub fn multiplier(&self) -> f64 {
        match self {
            BallType::Poke => 1.0,
            BallType::Great => 1.5,
            BallType::Ultra => 2.0,
        }
    }

    /// Human readable name of the ball
    pub fn display_name(&self) -> &'static str {
        match self {
            BallType::Poke => "Poké Ball",
            BallType::Great => "Great Ball",
            BallType::Ultra => "Ultra Ball",
        }
    }
}

impl FromStr for BallType {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "poke" | "pokeball" | "poke-ball" => Ok(BallType::Poke),
            "great" | "greatball" | "great-ball" => Ok(BallType::Great),
            "ultra" | "ultraball" | "ultra-ball" => Ok(BallType::Ultra),
            _ => Err(CaptureError::UnknownBall(s.to_string())),
        }
    }
}

impl fmt::Display for BallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
