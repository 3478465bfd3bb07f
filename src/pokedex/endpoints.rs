use log::info;
use rocket::State;
use serde::Serialize;

use super::{Pokedex, PokedexEntry, PokedexFilter, PokedexSort};
use crate::{
    game::Game,
    json::{JsonResult, JsonStatus},
    storage::StoreRecord,
};

#[derive(Serialize)]
struct PokedexPage {
    /// Species discovered, regardless of the filter
    total: usize,
    shiny: usize,
    entries: Vec<PokedexEntry>,
}

/// Endpoint for listing the pokedex, optionally filtered and sorted.
#[get("/pokedex?<filter>&<sort>")]
pub async fn get_pokedex<'a>(
    game: &State<Game>,
    filter: Option<String>,
    sort: Option<String>,
) -> JsonResult<'a> {
    info!("Request to /api/pokedex");

    let filter = match filter {
        Some(f) => f.parse::<PokedexFilter>()?,
        None => PokedexFilter::default(),
    };
    let sort = match sort {
        Some(s) => s.parse::<PokedexSort>()?,
        None => PokedexSort::default(),
    };

    let pokedex = Pokedex::load(game.store()).map_err(JsonStatus::from_anyhow)?;

    Ok(JsonStatus::data_owned(PokedexPage {
        total: pokedex.entries().len(),
        shiny: pokedex.shiny_species(),
        entries: pokedex.list(filter, sort),
    }))
}
