use std::str::FromStr;

#[macro_use]
extern crate rocket;

mod capture;
mod config;
mod constants;
mod error;
mod game;
mod json;
mod pokedex;
mod pokemon;
mod provider;
mod session;
mod stats;
mod storage;
mod team;
mod theme;

#[cfg(test)]
mod tests;

use crate::json::JsonResult;
use config::Config;
use game::Game;
use json::JsonStatus;
use log::{info, warn};
use pokemon::ball::BallType;
use rocket::{Build, Rocket};
use rocket_cors::{AllowedMethods, AllowedOrigins, CorsOptions};

fn make_cors() -> CorsOptions {
    let allowed_methods: AllowedMethods = ["Get", "Post", "Delete"]
        .iter()
        .filter_map(|s| FromStr::from_str(s).ok())
        .collect();

    CorsOptions::default()
        // the browser frontend is served from a different origin
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(allowed_methods)
        .allow_credentials(true)
}

/// Mounts every endpoint on top of the given game
pub fn build_rocket(game: Game) -> Rocket<Build> {
    let cors = make_cors().to_cors().expect("Error creating CORS fairing");

    rocket::build().attach(cors).manage(game).mount(
        "/api",
        routes![
            index,
            capture::endpoints::get_encounter,
            capture::endpoints::start_encounter,
            capture::endpoints::select_ball,
            capture::endpoints::throw_ball,
            capture::endpoints::throw_with_ball,
            pokemon::endpoints::get_pokemon,
            team::endpoints::get_team,
            team::endpoints::release_pokemon,
            pokedex::endpoints::get_pokedex,
            stats::endpoints::get_stats,
            theme::endpoints::get_theme,
            theme::endpoints::toggle_theme,
            theme::endpoints::set_theme,
            storage::endpoints::clear_data,
        ],
    )
}

#[launch]
fn rocket() -> _ {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = Config::load(constants::CONFIG_PATH).unwrap_or_else(|e| {
        warn!("{:#}, using default configuration", e);
        Config::default()
    });
    let game = Game::from_config(&config).expect("Error setting up the game");

    info!("Pokemon capture simulator ready");
    build_rocket(game)
}

/// Endpoint listing the ball tiers a player can throw.
#[get("/")]
pub async fn index<'a>() -> JsonResult<'a> {
    info!("Request to /api");
    Ok(JsonStatus::data_ref(&BallType::ALL))
}
