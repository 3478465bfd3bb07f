use log::info;
use rocket::State;

use super::Theme;
use crate::{
    game::Game,
    json::{JsonResult, JsonStatus},
    storage::StoreRecord,
};

/// Endpoint for reading the theme preference.
#[get("/theme")]
pub async fn get_theme<'a>(game: &State<Game>) -> JsonResult<'a> {
    info!("Request to /api/theme");
    let theme = Theme::load(game.store()).map_err(JsonStatus::from_anyhow)?;
    Ok(JsonStatus::data_owned(theme))
}

/// Endpoint for flipping between light and dark.
#[post("/theme/toggle")]
pub async fn toggle_theme<'a>(game: &State<Game>) -> JsonResult<'a> {
    info!("Request to /api/theme/toggle");
    let theme = Theme::update(game.store(), |theme| {
        *theme = theme.toggled();
        *theme
    })
    .map_err(JsonStatus::from_anyhow)?;
    Ok(JsonStatus::data_owned(theme))
}

/// Endpoint for setting the theme preference.
#[post("/theme/<theme>", rank = 2)]
pub async fn set_theme<'a>(game: &State<Game>, theme: String) -> JsonResult<'a> {
    info!("Request to /api/theme/{}", theme);
    let theme: Theme = theme.parse()?;
    theme.save(game.store()).map_err(JsonStatus::from_anyhow)?;
    Ok(JsonStatus::data_owned(theme))
}
