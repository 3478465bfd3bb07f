/// Base URL of the public Pokemon data API.
pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Highest national dex number a random encounter can roll.
pub const MAX_POKEMON_ID: u32 = 898;

/// A wild Pokemon is shiny with probability `1 / SHINY_ODDS`.
pub const SHINY_ODDS: u32 = 4096;

/// Maximum number of Pokemon the team can hold.
pub const MAX_CAPTURED: usize = 6;

/// Throw attempts per encounter before the Pokemon flees.
pub const MAX_THROW_ATTEMPTS: u8 = 3;

/// Shakes that must all hold for a capture.
pub const SHAKES_PER_THROW: u8 = 3;

/// Upper bound of the base capture rate, used to normalise the score to a percentage.
pub const CAPTURE_RATE_SCALE: f64 = 255.0;

/// Status conditions are not modelled yet, so every Pokemon is "healthy".
pub const STATUS_MULTIPLIER_NONE: f64 = 1.0;

/// Path of the configuration file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";
