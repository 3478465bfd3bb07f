use log::info;
use rocket::State;

use super::clear_all;
use crate::{
    game::Game,
    json::{JsonResult, JsonStatus},
};

/// Endpoint for wiping the team, pokedex, stats and theme.
#[delete("/data")]
pub async fn clear_data<'a>(game: &State<Game>) -> JsonResult<'a> {
    info!("Request to /api/data");

    let mut session = game.session()?;
    clear_all(game.store()).map_err(JsonStatus::from_anyhow)?;
    session.reset();

    Ok(JsonStatus::ok(Some("Game data cleared")))
}
