use log::info;
use rocket::State;

use crate::{
    game::Game,
    json::{JsonResult, JsonStatus},
};

/// Endpoint for looking up a single Pokemon by national dex number.
#[get("/pokemon/<id>")]
pub async fn get_pokemon<'a>(game: &State<Game>, id: u32) -> JsonResult<'a> {
    info!("Request to /api/pokemon/{}", id);

    if id == 0 || id > game.max_pokemon_id {
        return Err(JsonStatus::error("Pokemon id out of range"));
    }

    let pokemon = game
        .provider
        .pokemon_by_id(id)
        .await
        .map_err(JsonStatus::from_anyhow)?;

    Ok(JsonStatus::data_owned(pokemon))
}
