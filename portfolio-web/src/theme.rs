//! Theme context shared by every section of the page.
//!
//! [`use_theme_provider`] owns the persisted [`ThemeStore`]; descendants read
//! it through [`use_theme`] and change it by emitting the setter callbacks.
use crate::storage::WebPreferenceStorage;
use portfolio_core::{Palette, Playback, Preferences, Season, ThemeStore};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub prefs: Preferences,
    pub on_season: Callback<Season>,
    pub on_audio: Callback<bool>,
    pub on_volume: Callback<f64>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::fixed(Preferences::default())
    }
}

impl ThemeContext {
    /// Context with the given preferences and setters that do nothing.
    #[must_use]
    pub fn fixed(prefs: Preferences) -> Self {
        Self {
            prefs,
            on_season: Callback::noop(),
            on_audio: Callback::noop(),
            on_volume: Callback::noop(),
        }
    }

    #[must_use]
    pub const fn season(&self) -> Season {
        self.prefs.season
    }

    #[must_use]
    pub const fn palette(&self) -> Palette {
        Palette::for_season(self.prefs.season)
    }

    #[must_use]
    pub fn playback(&self) -> Playback {
        Playback::decide(self.prefs.audio_enabled, self.prefs.volume)
    }

    #[must_use]
    pub fn track_url(&self) -> String {
        crate::paths::track_url(self.prefs.season)
    }
}

/// Load preferences from `localStorage` and build the context value.
#[hook]
pub fn use_theme_provider() -> ThemeContext {
    let store = use_state(|| ThemeStore::load(WebPreferenceStorage));

    let on_season = {
        let store = store.clone();
        Callback::from(move |season: Season| {
            let mut next = (*store).clone();
            next.set_season(season);
            store.set(next);
        })
    };

    let on_audio = {
        let store = store.clone();
        Callback::from(move |enabled: bool| {
            let mut next = (*store).clone();
            next.set_audio_enabled(enabled);
            store.set(next);
        })
    };

    let on_volume = {
        let store = store.clone();
        Callback::from(move |volume: f64| {
            let mut next = (*store).clone();
            next.set_volume(volume);
            store.set(next);
        })
    };

    let season = store.season();
    use_effect_with(season, |season| {
        crate::dom::set_root_attribute("data-season", season.as_str());
        log::debug!("season applied: {season}");
    });

    ThemeContext {
        prefs: store.preferences(),
        on_season,
        on_audio,
        on_volume,
    }
}

/// Current theme; falls back to defaults outside a provider.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_uses_spring_palette() {
        let ctx = ThemeContext::default();
        assert_eq!(ctx.season(), Season::Spring);
        assert_eq!(ctx.palette(), Palette::for_season(Season::Spring));
        assert!(!ctx.playback().is_playing());
    }

    #[test]
    fn fixed_context_reports_playback() {
        let ctx = ThemeContext::fixed(Preferences {
            season: Season::Rainy,
            audio_enabled: true,
            volume: 0.5,
        });
        assert_eq!(ctx.playback(), Playback::Play { volume: 0.5 });
        assert_eq!(ctx.track_url(), "/Music/Rainy.mp3");
    }
}
