//! The capture flow as an explicit state machine.
//!
//! ```text
//! Idle ──begin_search──▶ Searching ──finish_search──▶ Displaying ◀──┐
//!   ▲                        │                           │          │ escaped
//!   └───────abort_search─────┘                      throw_ball      │
//!                                                        ▼          │
//! Resolved ◀──captured / fled── Shaking ◀────────── Throwing ───────┘
//! ```
//!
//! Only `Displaying` accepts a ball change or a throw, so a throw can never
//! start without a Pokemon and the ball cannot change mid-throw.

/// Sound cues for the frontend
pub mod feedback;

use std::{mem, sync::Arc};

use log::{debug, info};
use serde::Serialize;

use crate::{
    capture::{
        CaptureOutcome, ShakeCheck, display_chance,
        encounter::{Attempt, Encounter},
        events::{CaptureEvent, CaptureLog},
        random::ShakeRoll,
    },
    constants::{MAX_CAPTURED, MAX_THROW_ATTEMPTS},
    error::{CaptureError, CaptureResult},
    pokedex::Pokedex,
    pokemon::{CapturedPokemon, Pokemon, ball::BallType},
    provider::WildPokemon,
    stats::{GameStats, StatCounter},
    storage::{KeyValueStore, StoreRecord},
    team::Team,
};
use feedback::{Cue, Feedback};

/// How an encounter ended
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub pokemon: Pokemon,
    pub is_shiny: bool,
    pub outcome: CaptureOutcome,
    /// Set when the Pokemon was caught
    pub capture_id: Option<String>,
}

/// Where the capture flow currently is
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Nothing on screen
    Idle,
    /// Waiting for the data source
    Searching,
    /// A wild Pokemon is waiting for a ball
    Displaying(Encounter),
    /// A ball is in the air
    Throwing(Encounter),
    /// The ball is shaking
    Shaking { encounter: Encounter, shake: u8 },
    /// The encounter is over
    Resolved(Resolution),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Searching => "searching",
            SessionState::Displaying(_) => "displaying",
            SessionState::Throwing(_) => "throwing",
            SessionState::Shaking { .. } => "shaking",
            SessionState::Resolved(_) => "resolved",
        }
    }
}

/// The encounter as shown to the player
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EncounterView {
    pub pokemon: Pokemon,
    pub is_shiny: bool,
    pub ball: BallType,
    pub attempts_left: u8,
    pub shakes: u8,
    /// The shiny sprite for shiny encounters
    pub sprite: Option<String>,
    /// Chance per shake with the selected ball, in whole percent
    pub capture_chance: u8,
}

impl From<&Encounter> for EncounterView {
    fn from(encounter: &Encounter) -> Self {
        Self {
            pokemon: encounter.pokemon.clone(),
            is_shiny: encounter.is_shiny(),
            ball: encounter.ball(),
            attempts_left: encounter.attempts_left(),
            shakes: encounter.shakes(),
            sprite: encounter
                .pokemon
                .sprite(encounter.is_shiny())
                .map(str::to_string),
            capture_chance: display_chance(encounter.capture_chance()),
        }
    }
}

/// Snapshot of the session for the frontend
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SessionView {
    pub state: &'static str,
    pub encounter: Option<EncounterView>,
    pub resolution: Option<Resolution>,
}

/// Everything the frontend needs to animate one throw
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ThrowReport {
    pub outcome: CaptureOutcome,
    pub attempts_left: u8,
    pub shakes: Vec<ShakeCheck>,
    pub log: CaptureLog,
    /// The new team entry when the Pokemon was caught
    pub captured: Option<CapturedPokemon>,
}

/// One player's capture flow, backed by the game's store
pub struct CaptureSession {
    state: SessionState,
    store: Arc<dyn KeyValueStore>,
}

impl CaptureSession {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: SessionState::Idle,
            store,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    fn transition(&mut self, next: SessionState) {
        debug!("Session {} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    /// The encounter being targeted, if any
    pub fn encounter(&self) -> Option<&Encounter> {
        match &self.state {
            SessionState::Displaying(e) | SessionState::Throwing(e) => Some(e),
            SessionState::Shaking { encounter, .. } => Some(encounter),
            _ => None,
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            state: self.state.name(),
            encounter: self.encounter().map(EncounterView::from),
            resolution: match &self.state {
                SessionState::Resolved(r) => Some(r.clone()),
                _ => None,
            },
        }
    }

    /// Drops whatever is on screen
    pub fn reset(&mut self) {
        self.transition(SessionState::Idle);
    }

    /// Starts looking for a new Pokemon
    ///
    /// Refused while a Pokemon is still waiting for a ball.
    pub fn begin_search(&mut self) -> CaptureResult<()> {
        match &self.state {
            SessionState::Idle | SessionState::Resolved(_) => {
                self.transition(SessionState::Searching);
                Ok(())
            }
            SessionState::Displaying(_) => Err(CaptureError::EncounterInProgress),
            other => Err(CaptureError::InvalidState {
                action: "search for a Pokemon",
                state: other.name(),
            }),
        }
    }

    /// Shows the Pokemon the data source returned and counts the encounter
    pub fn finish_search(
        &mut self,
        wild: WildPokemon,
        feedback: &mut dyn Feedback,
    ) -> CaptureResult<()> {
        if !matches!(self.state, SessionState::Searching) {
            return Err(CaptureError::InvalidState {
                action: "show a Pokemon",
                state: self.state.name(),
            });
        }

        let shiny = wild.is_shiny;
        let counted = GameStats::update(self.store(), |stats| {
            stats.increment(StatCounter::Encounter);
            if shiny {
                stats.increment(StatCounter::ShinyEncounter);
            }
        });
        if let Err(e) = counted {
            self.transition(SessionState::Idle);
            return Err(e.into());
        }

        info!(
            "A wild {}{} appeared",
            wild.pokemon.name,
            if shiny { " (shiny)" } else { "" }
        );
        if shiny {
            feedback.play(Cue::Shiny);
        }

        self.transition(SessionState::Displaying(Encounter::new(wild)));
        Ok(())
    }

    /// Gives up on a search that failed; no counter is touched
    pub fn abort_search(&mut self) -> CaptureResult<()> {
        match self.state {
            SessionState::Searching => {
                self.transition(SessionState::Idle);
                Ok(())
            }
            _ => Err(CaptureError::InvalidState {
                action: "abort a search",
                state: self.state.name(),
            }),
        }
    }

    pub fn select_ball(&mut self, ball: BallType) -> CaptureResult<()> {
        match &mut self.state {
            SessionState::Displaying(encounter) => {
                encounter.select_ball(ball);
                Ok(())
            }
            SessionState::Idle | SessionState::Resolved(_) => Err(CaptureError::NoEncounter),
            other => Err(CaptureError::InvalidState {
                action: "change ball",
                state: other.name(),
            }),
        }
    }

    /// Throws the selected ball and applies the verdict to the store
    pub fn throw_ball(
        &mut self,
        rolls: &mut dyn ShakeRoll,
        feedback: &mut dyn Feedback,
    ) -> CaptureResult<ThrowReport> {
        match &self.state {
            SessionState::Displaying(_) => {}
            SessionState::Idle => return Err(CaptureError::NoEncounter),
            SessionState::Resolved(r) if r.outcome == CaptureOutcome::Fled => {
                return Err(CaptureError::AttemptsExhausted);
            }
            SessionState::Resolved(_) => return Err(CaptureError::NoEncounter),
            other => {
                return Err(CaptureError::InvalidState {
                    action: "throw a ball",
                    state: other.name(),
                });
            }
        }

        // a full team blocks the throw before it costs anything
        if Team::load(self.store())?.is_full() {
            return Err(CaptureError::TeamFull {
                capacity: MAX_CAPTURED,
            });
        }

        let mut encounter = match mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Displaying(e) => e,
            other => {
                self.state = other;
                return Err(CaptureError::NoEncounter);
            }
        };

        let ball = encounter.ball();
        if let Err(e) = GameStats::update(self.store(), |s| s.increment(StatCounter::Ball(ball))) {
            self.state = SessionState::Displaying(encounter);
            return Err(e.into());
        }

        let attempt_number = MAX_THROW_ATTEMPTS - encounter.attempts_left() + 1;
        let mut log = CaptureLog::new(
            encounter.pokemon.name.clone(),
            ball,
            display_chance(encounter.capture_chance()),
        );

        let attempt = match encounter.throw(rolls) {
            Ok(attempt) => attempt,
            Err(e) => {
                self.state = SessionState::Displaying(encounter);
                return Err(e);
            }
        };

        self.transition(SessionState::Throwing(encounter));
        feedback.play(Cue::Throw);
        log.push(CaptureEvent::Throw {
            ball,
            attempt: attempt_number,
        });

        for check in &attempt.sequence.shakes {
            self.advance_shake(check.number);
            debug!(
                "Shake {}: rolled {:.2} against {:.2}, {}",
                check.number,
                check.roll,
                attempt.sequence.chance,
                if check.held { "held" } else { "broke" }
            );
            feedback.play(Cue::Shake);
            log.push(CaptureEvent::Shake {
                number: check.number,
            });
        }

        let encounter = self.take_in_flight()?;

        match self.apply_outcome(&encounter, &attempt, &mut log, feedback) {
            Ok(captured) => Ok(ThrowReport {
                outcome: attempt.outcome,
                attempts_left: encounter.attempts_left(),
                shakes: attempt.sequence.shakes,
                log,
                captured,
            }),
            Err(e) => {
                self.state = SessionState::Displaying(encounter);
                Err(e)
            }
        }
    }

    /// Throwing/Shaking -> Shaking at the given shake
    fn advance_shake(&mut self, shake: u8) {
        let next = match mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Throwing(encounter) | SessionState::Shaking { encounter, .. } => {
                SessionState::Shaking { encounter, shake }
            }
            other => other,
        };
        self.transition(next);
    }

    fn take_in_flight(&mut self) -> CaptureResult<Encounter> {
        match mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Throwing(encounter) | SessionState::Shaking { encounter, .. } => {
                Ok(encounter)
            }
            other => {
                let state = other.name();
                self.state = other;
                Err(CaptureError::InvalidState {
                    action: "resolve a throw",
                    state,
                })
            }
        }
    }

    /// Writes the verdict to the store and moves to the next state
    fn apply_outcome(
        &mut self,
        encounter: &Encounter,
        attempt: &Attempt,
        log: &mut CaptureLog,
        feedback: &mut dyn Feedback,
    ) -> CaptureResult<Option<CapturedPokemon>> {
        let name = encounter.pokemon.name.clone();
        let shiny = encounter.is_shiny();

        match attempt.outcome {
            CaptureOutcome::Escaped { attempts_left } => {
                GameStats::update(self.store(), |s| s.increment(StatCounter::Escape))?;
                feedback.play(Cue::Fail);
                log.push(CaptureEvent::BrokeFree {
                    pokemon: name.clone(),
                    shake: attempt.sequence.broke_free_on().unwrap_or(1),
                    attempts_left,
                });
                info!("{} broke free, {} throws left", name, attempts_left);

                self.transition(SessionState::Displaying(encounter.clone()));
                Ok(None)
            }
            CaptureOutcome::Fled => {
                GameStats::update(self.store(), |s| s.increment(StatCounter::Escape))?;
                feedback.play(Cue::Fail);
                log.push(CaptureEvent::Fled {
                    pokemon: name.clone(),
                    shiny,
                });
                info!("{} fled", name);

                self.transition(SessionState::Resolved(Resolution {
                    pokemon: encounter.pokemon.clone(),
                    is_shiny: shiny,
                    outcome: CaptureOutcome::Fled,
                    capture_id: None,
                }));
                Ok(None)
            }
            CaptureOutcome::Captured => {
                let captured =
                    CapturedPokemon::new(encounter.pokemon.clone(), shiny, attempt.ball);

                let team_size = Team::update(self.store(), |team| {
                    team.add(captured.clone());
                    team.len()
                })?;
                let new_species = Pokedex::update(self.store(), |dex| {
                    dex.record_capture(&captured);
                    dex.entry(captured.pokemon.id)
                        .is_some_and(|entry| entry.capture_count == 1)
                })?;
                GameStats::update(self.store(), |s| {
                    s.increment(StatCounter::Capture);
                    if shiny {
                        s.increment(StatCounter::ShinyCapture);
                    }
                })?;

                feedback.play(Cue::Success);
                log.push(CaptureEvent::Caught {
                    pokemon: name.clone(),
                    capture_id: captured.capture_id.clone(),
                    shiny,
                });
                info!(
                    "Caught {} with a {} ({}/{} on the team)",
                    name, attempt.ball, team_size, MAX_CAPTURED
                );
                if new_species {
                    info!("{} was added to the pokedex", name);
                }

                self.transition(SessionState::Resolved(Resolution {
                    pokemon: encounter.pokemon.clone(),
                    is_shiny: shiny,
                    outcome: CaptureOutcome::Captured,
                    capture_id: Some(captured.capture_id.clone()),
                }));
                Ok(Some(captured))
            }
        }
    }
}
