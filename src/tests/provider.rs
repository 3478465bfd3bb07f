use crate::{
    config::ProviderConfig,
    pokemon::{ptype::PokemonType, stats::PokemonStats},
    provider::pokeapi::{ApiPokemon, ApiSpecies, PokeApiClient},
};

const BULBASAUR: &str = r#"{
    "id": 1,
    "name": "bulbasaur",
    "base_experience": 64,
    "sprites": {
        "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png",
        "front_shiny": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/shiny/1.png",
        "back_default": null
    },
    "types": [
        { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
        { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
    ],
    "stats": [
        { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
        { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } },
        { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack", "url": "https://pokeapi.co/api/v2/stat/4/" } }
    ],
    "species": { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/" }
}"#;

#[test]
fn test_api_pokemon_conversion() {
    let api: ApiPokemon = serde_json::from_str(BULBASAUR).unwrap();
    assert_eq!(api.species.url, "https://pokeapi.co/api/v2/pokemon-species/1/");

    let species: ApiSpecies =
        serde_json::from_str(r#"{ "capture_rate": 45, "is_legendary": false }"#).unwrap();
    let pokemon = api.into_pokemon(species);

    assert_eq!(pokemon.id, 1);
    assert_eq!(pokemon.name, "Bulbasaur");
    assert_eq!(pokemon.capture_rate, 45);
    assert_eq!(
        pokemon.types.iter().copied().collect::<Vec<_>>(),
        vec![PokemonType::Grass, PokemonType::Poison]
    );
    // defense is missing from the payload
    assert_eq!(
        pokemon.stats,
        PokemonStats {
            hp: 45,
            attack: 49,
            defense: 0
        }
    );
    assert!(pokemon.sprite(true).unwrap().contains("shiny"));
    assert!(!pokemon.sprite(false).unwrap().contains("shiny"));
}

#[test]
fn test_unknown_type_is_kept() {
    let raw = BULBASAUR.replace("\"poison\"", "\"stellar\"");
    let api: ApiPokemon = serde_json::from_str(&raw).unwrap();
    let pokemon = api.into_pokemon(ApiSpecies { capture_rate: 45 });

    assert!(pokemon.types.contains(&PokemonType::Unknown));
    assert!(pokemon.types.contains(&PokemonType::Grass));
}

#[test]
fn test_missing_sprites_are_none() {
    let raw = BULBASAUR.replace(
        "\"front_shiny\": \"https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/shiny/1.png\"",
        "\"front_shiny\": null",
    );
    let api: ApiPokemon = serde_json::from_str(&raw).unwrap();
    let pokemon = api.into_pokemon(ApiSpecies { capture_rate: 45 });

    assert_eq!(pokemon.sprite(true), None);
    assert!(pokemon.sprite(false).is_some());
}

#[test]
fn test_out_of_range_capture_rate_is_rejected() {
    assert!(serde_json::from_str::<ApiSpecies>(r#"{ "capture_rate": 300 }"#).is_err());
}

#[test]
fn test_client_builds_from_config() {
    let config = ProviderConfig {
        base_url: "http://localhost:9/api/v2/".to_string(),
        ..ProviderConfig::default()
    };
    assert!(PokeApiClient::new(&config).is_ok());
}

#[tokio::test]
async fn test_unreachable_api_is_an_error() {
    let config = ProviderConfig {
        // nothing listens on the discard port
        base_url: "http://127.0.0.1:9/api/v2".to_string(),
        max_pokemon_id: 1,
        timeout_secs: 1,
    };
    let client = PokeApiClient::new(&config).unwrap();

    let err = client.fetch_pokemon(1).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Pokemon not found"));
}
