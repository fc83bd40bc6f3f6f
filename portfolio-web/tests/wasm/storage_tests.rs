use portfolio_core::{AUDIO_KEY, PreferenceStorage, SEASON_KEY, Season, ThemeStore, VOLUME_KEY};
use portfolio_web::storage::WebPreferenceStorage;
use wasm_bindgen_test::*;

fn clear() {
    let storage = portfolio_web::dom::window()
        .expect("window")
        .local_storage()
        .expect("storage access")
        .expect("local storage");
    for key in [SEASON_KEY, AUDIO_KEY, VOLUME_KEY] {
        storage.remove_item(key).expect("remove key");
    }
}

#[wasm_bindgen_test]
fn preferences_survive_a_reload() {
    clear();
    let mut store = ThemeStore::load(WebPreferenceStorage);
    assert_eq!(store.season(), Season::Spring);
    store.set_season(Season::Autumn);
    store.set_audio_enabled(true);
    store.set_volume(0.8);

    let reloaded = ThemeStore::load(WebPreferenceStorage);
    assert_eq!(reloaded.season(), Season::Autumn);
    assert!(reloaded.audio_enabled());
    assert!((reloaded.volume() - 0.8).abs() < f64::EPSILON);
    clear();
}

#[wasm_bindgen_test]
fn corrupted_volume_loads_clamped() {
    clear();
    WebPreferenceStorage
        .write(VOLUME_KEY, "7")
        .expect("write volume");
    let store = ThemeStore::load(WebPreferenceStorage);
    assert!((store.volume() - 1.0).abs() < f64::EPSILON);
    let stored = WebPreferenceStorage.read(VOLUME_KEY).expect("read volume");
    assert_eq!(stored.as_deref(), Some("1"));
    clear();
}
