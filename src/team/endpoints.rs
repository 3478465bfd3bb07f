use log::{debug, info};
use rocket::State;

use super::Team;
use crate::{
    error::CaptureError,
    game::Game,
    json::{JsonResult, JsonStatus},
    storage::StoreRecord,
};

/// Endpoint for listing the captured Pokemon.
#[get("/team")]
pub async fn get_team<'a>(game: &State<Game>) -> JsonResult<'a> {
    info!("Request to /api/team");
    let team = Team::load(game.store()).map_err(JsonStatus::from_anyhow)?;
    if team.is_empty() {
        debug!("Team is empty");
    } else {
        debug!(
            "Team: {}",
            team.members()
                .iter()
                .map(|p| p.pokemon.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(JsonStatus::data_owned(team))
}

/// Endpoint for releasing a captured Pokemon.
///
/// Stats and the pokedex keep the capture.
#[delete("/team/<capture_id>")]
pub async fn release_pokemon<'a>(game: &State<Game>, capture_id: String) -> JsonResult<'a> {
    info!("Request to /api/team/{}", capture_id);

    // a throw in flight writes the team too
    let _session = game.session()?;
    let released = Team::update(game.store(), |team| team.release(&capture_id))
        .map_err(JsonStatus::from_anyhow)?
        .ok_or(CaptureError::NotFound(capture_id))?;

    info!("Released {} ({})", released.pokemon.name, released.capture_id);
    Ok(JsonStatus::data_owned(released))
}
