use log::info;
use rocket::State;

use super::GameStats;
use crate::{
    game::Game,
    json::{JsonResult, JsonStatus},
    storage::StoreRecord,
};

/// Endpoint for the aggregate statistics and derived rates.
#[get("/stats")]
pub async fn get_stats<'a>(game: &State<Game>) -> JsonResult<'a> {
    info!("Request to /api/stats");
    let stats = GameStats::load(game.store()).map_err(JsonStatus::from_anyhow)?;
    Ok(JsonStatus::data_owned(stats.summary()))
}
