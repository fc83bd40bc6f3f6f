use portfolio_core::{
    AUDIO_KEY, MemoryStorage, Palette, Playback, SEASON_KEY, SEASONS, Season, ThemeStore,
    VOLUME_KEY,
};

#[test]
fn first_visit_uses_defaults() {
    let store = ThemeStore::load(MemoryStorage::new());
    assert_eq!(store.season(), Season::Spring);
    assert!(!store.audio_enabled());
    assert!((store.volume() - 0.25).abs() < f64::EPSILON);
    assert_eq!(store.palette(), Palette::for_season(Season::Spring));
    assert_eq!(store.playback(), Playback::Pause);
}

#[test]
fn corrupted_volume_is_repaired_on_load() {
    for (raw, expected) in [("12", 1.0), ("-4", 0.0), ("0.7", 0.7), ("oops", 0.25), ("inf", 0.25)] {
        let storage = MemoryStorage::with_entries([(VOLUME_KEY, raw)]);
        let store = ThemeStore::load(storage);
        assert!(
            (store.volume() - expected).abs() < 1e-9,
            "{raw} loaded as {}",
            store.volume()
        );
        assert!((0.0..=1.0).contains(&store.volume()));
    }
}

#[test]
fn unknown_stored_season_falls_back() {
    let storage = MemoryStorage::with_entries([(SEASON_KEY, "monsoon")]);
    assert_eq!(ThemeStore::load(storage).season(), Season::Spring);
}

#[test]
fn repaired_values_are_what_the_next_visit_reads() {
    let storage = MemoryStorage::with_entries([
        (SEASON_KEY, " Winter "),
        (AUDIO_KEY, "yes"),
        (VOLUME_KEY, "12"),
    ]);
    let first = ThemeStore::load(storage.clone());
    assert_eq!(storage.get(SEASON_KEY).as_deref(), Some("winter"));
    assert_eq!(storage.get(AUDIO_KEY).as_deref(), Some("false"));
    assert_eq!(storage.get(VOLUME_KEY).as_deref(), Some("1"));

    let second = ThemeStore::load(storage);
    assert_eq!(second.preferences(), first.preferences());
}

#[test]
fn every_season_survives_a_reload() {
    for season in SEASONS {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::load(storage.clone());
        store.set_season(season);
        assert_eq!(store.palette(), Palette::for_season(season));

        let reloaded = ThemeStore::load(storage);
        assert_eq!(reloaded.season(), season);
        assert_eq!(reloaded.palette(), Palette::for_season(season));
    }
}

#[test]
fn audio_preferences_survive_a_reload() {
    let storage = MemoryStorage::new();
    let mut store = ThemeStore::load(storage.clone());
    store.set_audio_enabled(true);
    store.set_volume(0.6);

    let reloaded = ThemeStore::load(storage.clone());
    assert!(reloaded.audio_enabled());
    assert!((reloaded.volume() - 0.6).abs() < 1e-9);
    assert_eq!(storage.get(AUDIO_KEY).as_deref(), Some("true"));
}

#[test]
fn muting_stops_playback_at_any_volume() {
    let mut store = ThemeStore::load(MemoryStorage::new());
    store.set_audio_enabled(true);
    store.set_volume(1.0);
    assert!(store.playback().is_playing());
    store.set_audio_enabled(false);
    assert_eq!(store.playback(), Playback::Pause);
}

#[test]
fn enabling_at_zero_volume_plays_silently() {
    let mut store = ThemeStore::load(MemoryStorage::new());
    store.set_volume(0.0);
    store.set_audio_enabled(true);
    assert_eq!(store.playback(), Playback::Play { volume: 0.0 });
}

#[test]
fn broken_storage_never_panics() {
    let mut store = ThemeStore::load(MemoryStorage::unavailable());
    store.set_season(Season::Winter);
    store.toggle_audio();
    store.set_volume(0.9);
    assert_eq!(store.season(), Season::Winter);
    assert!(store.audio_enabled());
}
