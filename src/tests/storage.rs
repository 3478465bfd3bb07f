use std::{sync::Arc, thread};

use crate::{
    stats::{GameStats, StatCounter},
    storage::{
        KeyValueStore, RECORD_KEYS, STATS_KEY, StoreRecord, THEME_KEY, clear_all, file::FileStore,
        memory::MemoryStore,
    },
    team::Team,
    theme::Theme,
};

fn exercise_store(store: &dyn KeyValueStore) {
    assert_eq!(store.get("game_stats").unwrap(), None);

    store.set("game_stats", "{}".to_string()).unwrap();
    assert_eq!(store.get("game_stats").unwrap().as_deref(), Some("{}"));

    store.set("game_stats", "[]".to_string()).unwrap();
    assert_eq!(store.get("game_stats").unwrap().as_deref(), Some("[]"));

    store.remove("game_stats").unwrap();
    assert_eq!(store.get("game_stats").unwrap(), None);

    // removing twice is fine
    store.remove("game_stats").unwrap();
}

#[test]
fn test_memory_store() {
    exercise_store(&MemoryStore::new());
}

#[test]
fn test_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("save")).unwrap();
    exercise_store(&store);
}

#[test]
fn test_file_store_persists_between_handles() {
    let dir = tempfile::tempdir().unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    Theme::Dark.save(&store).unwrap();

    let reopened = FileStore::open(dir.path()).unwrap();
    assert_eq!(Theme::load(&reopened).unwrap(), Theme::Dark);
    assert!(dir.path().join("theme.json").exists());
}

#[test]
fn test_file_store_rejects_odd_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    assert!(store.get("../escape").is_err());
    assert!(store.set("", "x".to_string()).is_err());
}

#[test]
fn test_missing_records_load_defaults() {
    let store = MemoryStore::new();

    assert_eq!(GameStats::load(&store).unwrap(), GameStats::default());
    assert!(Team::load(&store).unwrap().is_empty());
    assert_eq!(Theme::load(&store).unwrap(), Theme::Light);
}

#[test]
fn test_update_is_read_modify_write() {
    let store = MemoryStore::new();

    GameStats::update(&store, |s| s.increment(StatCounter::Encounter)).unwrap();
    GameStats::update(&store, |s| s.increment(StatCounter::Encounter)).unwrap();

    let raw = store.get(STATS_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["totalEncounters"], 2);
    assert_eq!(json["ballsUsed"]["poke"], 0);
}

#[test]
fn test_corrupt_record_is_an_error() {
    let store = MemoryStore::new();
    store.set(THEME_KEY, "not json".to_string()).unwrap();

    let err = Theme::load(&store).unwrap_err();
    assert!(format!("{:#}", err).contains("theme"));
}

#[test]
fn test_clear_all_removes_every_record() {
    let store = MemoryStore::new();
    for key in RECORD_KEYS {
        store.set(key, "null".to_string()).unwrap();
    }
    store.set("unrelated", "1".to_string()).unwrap();

    clear_all(&store).unwrap();

    for key in RECORD_KEYS {
        assert_eq!(store.get(key).unwrap(), None);
    }
    assert_eq!(store.get("unrelated").unwrap().as_deref(), Some("1"));
}

#[test]
fn test_concurrent_updates_are_not_lost() {
    let store = Arc::new(MemoryStore::new());

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    GameStats::update(store.as_ref(), |s| s.increment(StatCounter::Encounter))
                        .unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(GameStats::load(store.as_ref()).unwrap().total_encounters, 1000);
}

#[test]
fn test_file_store_replaces_records_whole() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    store.set(STATS_KEY, "{\"totalEncounters\":12345}".to_string()).unwrap();
    store.set(STATS_KEY, "{}".to_string()).unwrap();

    assert_eq!(store.get(STATS_KEY).unwrap().as_deref(), Some("{}"));
    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files, vec!["game_stats.json".to_string()]);
}
