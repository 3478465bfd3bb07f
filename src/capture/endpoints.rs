use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};
use rocket::State;
use serde::Serialize;

use super::random::RngRoll;
use crate::{
    error::{CaptureError, CaptureResult},
    game::Game,
    json::{JsonResult, JsonStatus},
    pokemon::ball::BallType,
    session::{SessionView, ThrowReport, feedback::Cue},
};

#[derive(Serialize)]
struct EncounterResponse {
    session: SessionView,
    cues: Vec<Cue>,
}

#[derive(Serialize)]
struct ThrowResponse {
    #[serde(flatten)]
    report: ThrowReport,
    session: SessionView,
    cues: Vec<Cue>,
}

/// Endpoint for the current state of the capture screen.
#[get("/encounter")]
pub async fn get_encounter<'a>(game: &State<Game>) -> JsonResult<'a> {
    info!("Request to /api/encounter");
    let view = game.session()?.view();
    Ok(JsonStatus::data_owned(view))
}

/// Endpoint for looking for a new wild Pokemon.
///
/// A failed lookup leaves stats untouched and can simply be retried.
#[post("/encounter")]
pub async fn start_encounter<'a>(game: &State<Game>) -> JsonResult<'a> {
    info!("Request to /api/encounter");

    game.session()?.begin_search()?;

    let wild = match game.provider.random_pokemon().await {
        Ok(wild) => wild,
        Err(e) => {
            warn!("Pokemon lookup failed: {:#}", e);
            game.session()?.abort_search()?;
            return Err(CaptureError::ProviderUnavailable(e.to_string()).into());
        }
    };

    let mut cues = Vec::new();
    let session = {
        let mut session = game.session()?;
        session.finish_search(wild, &mut cues)?;
        session.view()
    };

    Ok(JsonStatus::data_owned(EncounterResponse { session, cues }))
}

/// Endpoint for choosing the ball for the next throw.
#[post("/encounter/ball/<ball>")]
pub async fn select_ball<'a>(game: &State<Game>, ball: String) -> JsonResult<'a> {
    info!("Request to /api/encounter/ball/{}", ball);

    let ball: BallType = ball.parse()?;
    let view = {
        let mut session = game.session()?;
        session.select_ball(ball)?;
        session.view()
    };

    Ok(JsonStatus::data_owned(view))
}

/// Endpoint for throwing the selected ball.
#[post("/throw")]
pub async fn throw_ball<'a>(game: &State<Game>) -> JsonResult<'a> {
    info!("Request to /api/throw");
    let response = run_throw(game, None)?;
    Ok(JsonStatus::data_owned(response))
}

/// Endpoint for switching ball and throwing in one request.
#[post("/throw/<ball>")]
pub async fn throw_with_ball<'a>(game: &State<Game>, ball: String) -> JsonResult<'a> {
    info!("Request to /api/throw/{}", ball);
    let ball: BallType = ball.parse()?;
    let response = run_throw(game, Some(ball))?;
    Ok(JsonStatus::data_owned(response))
}

fn run_throw(game: &Game, ball: Option<BallType>) -> CaptureResult<ThrowResponse> {
    let mut rolls = RngRoll(StdRng::from_entropy());
    let mut cues = Vec::new();

    let mut session = game.session()?;
    if let Some(ball) = ball {
        session.select_ball(ball)?;
    }
    let report = session.throw_ball(&mut rolls, &mut cues)?;

    Ok(ThrowResponse {
        report,
        session: session.view(),
        cues,
    })
}
