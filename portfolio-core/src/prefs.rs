//! Theme and ambient-audio preference store
//!
//! Holds the current season, the ambient toggle and its volume. Every setter
//! validates its input and persists the field it changed. Storage
//! failures are logged and otherwise ignored: the in-memory value stays
//! authoritative for the rest of the visit.
use crate::ambient::Playback;
use crate::palette::Palette;
use crate::season::{ParseSeasonError, Season};
use crate::storage::PreferenceStorage;

pub const SEASON_KEY: &str = "season";
pub const AUDIO_KEY: &str = "season-audio";
pub const VOLUME_KEY: &str = "season-volume";

pub const DEFAULT_VOLUME: f64 = 0.25;

/// Clamp a volume into `[0, 1]`; `None` for NaN and infinities.
#[must_use]
pub fn clamp_volume(volume: f64) -> Option<f64> {
    volume.is_finite().then(|| volume.clamp(0.0, 1.0))
}

/// Snapshot of the persisted preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub season: Season,
    pub audio_enabled: bool,
    pub volume: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            season: Season::default(),
            audio_enabled: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl Preferences {
    /// Build preferences from raw stored text, repairing anything invalid.
    #[must_use]
    pub fn from_raw(season: Option<&str>, audio: Option<&str>, volume: Option<&str>) -> Self {
        let volume = volume
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .and_then(clamp_volume)
            .unwrap_or(DEFAULT_VOLUME);
        Self {
            season: Season::from_stored(season),
            audio_enabled: audio == Some("true"),
            volume,
        }
    }

    /// Load from storage; unreadable keys count as absent.
    pub fn load<S: PreferenceStorage>(storage: &S) -> Self {
        let season = read_key(storage, SEASON_KEY);
        let audio = read_key(storage, AUDIO_KEY);
        let volume = read_key(storage, VOLUME_KEY);
        Self::from_raw(season.as_deref(), audio.as_deref(), volume.as_deref())
    }
}

fn read_key<S: PreferenceStorage>(storage: &S, key: &str) -> Option<String> {
    match storage.read(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("preference `{key}` could not be read: {err}");
            None
        }
    }
}

fn write_key<S: PreferenceStorage>(storage: &S, key: &str, value: &str) {
    if let Err(err) = storage.write(key, value) {
        log::warn!("preference `{key}` could not be saved: {err}");
    }
}

const fn audio_flag(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

/// Preference store bound to a storage backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStore<S> {
    storage: S,
    prefs: Preferences,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    /// Load the stored preferences, falling back to defaults, and write the
    /// resolved values back so missing or corrupted keys are replaced.
    pub fn load(storage: S) -> Self {
        let prefs = Preferences::load(&storage);
        log::debug!(
            "loaded preferences: season={} audio={} volume={}",
            prefs.season,
            prefs.audio_enabled,
            prefs.volume
        );
        let store = Self { storage, prefs };
        store.persist_all();
        store
    }

    fn persist_all(&self) {
        write_key(&self.storage, SEASON_KEY, self.prefs.season.as_str());
        write_key(&self.storage, AUDIO_KEY, audio_flag(self.prefs.audio_enabled));
        write_key(&self.storage, VOLUME_KEY, &self.prefs.volume.to_string());
    }

    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        self.prefs
    }

    #[must_use]
    pub const fn season(&self) -> Season {
        self.prefs.season
    }

    #[must_use]
    pub const fn audio_enabled(&self) -> bool {
        self.prefs.audio_enabled
    }

    #[must_use]
    pub const fn volume(&self) -> f64 {
        self.prefs.volume
    }

    #[must_use]
    pub const fn palette(&self) -> Palette {
        Palette::for_season(self.prefs.season)
    }

    #[must_use]
    pub fn playback(&self) -> Playback {
        Playback::decide(self.prefs.audio_enabled, self.prefs.volume)
    }

    pub fn set_season(&mut self, season: Season) {
        self.prefs.season = season;
        write_key(&self.storage, SEASON_KEY, season.as_str());
    }

    /// Parse and apply a season name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSeasonError`] for unknown names; the store is left untouched.
    pub fn set_season_str(&mut self, raw: &str) -> Result<Season, ParseSeasonError> {
        let season = raw.parse::<Season>()?;
        self.set_season(season);
        Ok(season)
    }

    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.prefs.audio_enabled = enabled;
        write_key(&self.storage, AUDIO_KEY, audio_flag(enabled));
    }

    /// Flip the ambient toggle and return the new state.
    pub fn toggle_audio(&mut self) -> bool {
        let next = !self.prefs.audio_enabled;
        self.set_audio_enabled(next);
        next
    }

    /// Apply a volume, clamped into `[0, 1]`. Non-finite input is ignored.
    pub fn set_volume(&mut self, volume: f64) {
        let Some(volume) = clamp_volume(volume) else {
            log::warn!("ignoring non-finite volume {volume}");
            return;
        };
        self.prefs.volume = volume;
        write_key(&self.storage, VOLUME_KEY, &volume.to_string());
    }
}
