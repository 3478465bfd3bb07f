use thiserror::Error;

/// Errors surfaced by the capture game
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The data source could not supply a Pokemon; nothing was changed
    #[error("Pokemon data unavailable: {0}")]
    ProviderUnavailable(String),

    /// The team has no free slot, a Pokemon must be released first
    #[error("Team is full ({capacity} Pokemon), release one before throwing")]
    TeamFull { capacity: usize },

    #[error("No Pokemon is being encountered")]
    NoEncounter,

    #[error("The current Pokemon has not been caught or fled yet")]
    EncounterInProgress,

    #[error("Cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },

    #[error("No throws left for this Pokemon")]
    AttemptsExhausted,

    #[error("Unknown ball type '{0}'")]
    UnknownBall(String),

    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("Invalid query parameter '{0}'")]
    InvalidQuery(String),

    #[error("No captured Pokemon with id '{0}'")]
    NotFound(String),

    #[error("Game session is unavailable")]
    SessionPoisoned,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type CaptureResult<T> = Result<T, CaptureError>;
