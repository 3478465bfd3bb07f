use super::{pikachu, sample_pokemon};
use crate::{
    error::CaptureError,
    pokedex::{Pokedex, PokedexFilter, PokedexSort},
    pokemon::{CapturedPokemon, ball::BallType, display_name},
    stats::{GameStats, StatCounter},
    team::Team,
    theme::Theme,
};

fn captured_at(id: u32, shiny: bool, at: i64) -> CapturedPokemon {
    let mut captured = CapturedPokemon::new(sample_pokemon(id, 45), shiny, BallType::Poke);
    captured.captured_at = at;
    captured
}

#[test]
fn test_capture_ids_are_unique() {
    let a = CapturedPokemon::new(pikachu(), false, BallType::Poke);
    let b = CapturedPokemon::new(pikachu(), false, BallType::Poke);
    assert_ne!(a.capture_id, b.capture_id);
}

#[test]
fn test_captured_pokemon_json_shape() {
    let captured = CapturedPokemon::new(pikachu(), true, BallType::Ultra);
    let json = serde_json::to_value(&captured).unwrap();

    assert_eq!(json["id"], 25);
    assert_eq!(json["name"], "Pikachu");
    assert_eq!(json["captureRate"], 190);
    assert_eq!(json["types"], serde_json::json!(["electric"]));
    assert_eq!(json["stats"]["hp"], 35);
    assert_eq!(json["isShiny"], true);
    assert_eq!(json["ballUsed"], "ultra");
    assert!(json["captureId"].is_string());

    let back: CapturedPokemon = serde_json::from_value(json).unwrap();
    assert_eq!(back, captured);
}

#[test]
fn test_team_release_by_capture_id() {
    let mut team = Team::default();
    let first = CapturedPokemon::new(pikachu(), false, BallType::Poke);
    let second = CapturedPokemon::new(pikachu(), false, BallType::Poke);
    team.add(first.clone());
    team.add(second.clone());

    // same species, only the capture id tells them apart
    assert_eq!(team.release(&second.capture_id), Some(second));
    assert_eq!(team.members(), &[first.clone()]);
    assert_eq!(team.release("missing"), None);
    assert_eq!(team.len(), 1);
}

#[test]
fn test_team_capacity() {
    let mut team = Team::default();
    for id in 1..=5 {
        team.add(captured_at(id, false, 0));
    }
    assert!(!team.is_full());
    team.add(captured_at(6, false, 0));
    assert!(team.is_full());
}

#[test]
fn test_pokedex_counts_repeat_captures() {
    let mut dex = Pokedex::default();
    dex.record_capture(&captured_at(7, false, 1_000));
    dex.record_capture(&captured_at(7, true, 2_000));
    dex.record_capture(&captured_at(4, false, 3_000));

    assert_eq!(dex.entries().len(), 2);
    let squirtle = dex.entry(7).unwrap();
    assert_eq!(squirtle.capture_count, 2);
    assert_eq!(squirtle.shiny_count, 1);
    assert_eq!(squirtle.first_captured, 1_000);
    assert_eq!(dex.shiny_species(), 1);
}

#[test]
fn test_pokedex_filter_and_sort() {
    let mut dex = Pokedex::default();
    dex.record_capture(&captured_at(150, false, 3_000));
    dex.record_capture(&captured_at(1, true, 1_000));
    dex.record_capture(&captured_at(25, false, 2_000));
    dex.record_capture(&captured_at(25, false, 4_000));

    let ids = |entries: Vec<crate::pokedex::PokedexEntry>| {
        entries.into_iter().map(|e| e.id).collect::<Vec<_>>()
    };

    assert_eq!(ids(dex.list(PokedexFilter::All, PokedexSort::Id)), vec![1, 25, 150]);
    assert_eq!(ids(dex.list(PokedexFilter::All, PokedexSort::Captures))[0], 25);
    assert_eq!(ids(dex.list(PokedexFilter::All, PokedexSort::Date)), vec![150, 25, 1]);
    assert_eq!(ids(dex.list(PokedexFilter::Shiny, PokedexSort::Id)), vec![1]);

    assert_eq!("shiny".parse::<PokedexFilter>().unwrap(), PokedexFilter::Shiny);
    assert_eq!("date".parse::<PokedexSort>().unwrap(), PokedexSort::Date);
    assert!(matches!(
        "newest".parse::<PokedexSort>(),
        Err(CaptureError::InvalidQuery(_))
    ));
}

#[test]
fn test_stats_counters() {
    let mut stats = GameStats::default();
    stats.increment(StatCounter::Encounter);
    stats.increment(StatCounter::Escape);
    stats.increment(StatCounter::Ball(BallType::Great));
    stats.increment(StatCounter::Ball(BallType::Great));
    stats.increment(StatCounter::Ball(BallType::Ultra));

    assert_eq!(stats.total_encounters, 1);
    assert_eq!(stats.total_escapes, 1);
    assert_eq!(stats.balls_used.get(BallType::Great), 2);
    assert_eq!(stats.balls_used.get(BallType::Poke), 0);
    assert_eq!(stats.balls_used.total(), 3);
}

#[test]
fn test_stats_summary() {
    let empty = GameStats::default().summary();
    assert_eq!(empty.capture_rate, 0.0);
    assert_eq!(empty.shiny_one_in, 0);
    assert!(!empty.lucky);

    let stats = GameStats {
        total_encounters: 3,
        total_captures: 2,
        shiny_encounters: 1,
        shiny_captured: 1,
        ..GameStats::default()
    };
    let summary = stats.summary();
    assert_eq!(summary.capture_rate, 66.7);
    assert_eq!(summary.shiny_capture_rate, 100.0);
    assert_eq!(summary.shiny_one_in, 3);
    assert!(summary.lucky);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["totalEncounters"], 3);
    assert_eq!(json["captureRate"], 66.7);
}

#[test]
fn test_theme_toggle_and_parse() {
    assert_eq!(Theme::default(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert!(matches!(
        "blue".parse::<Theme>(),
        Err(CaptureError::UnknownTheme(_))
    ));
}

#[test]
fn test_display_name() {
    assert_eq!(display_name("pikachu"), "Pikachu");
    assert_eq!(display_name("mr-mime"), "Mr-mime");
    assert_eq!(display_name(""), "");
}
