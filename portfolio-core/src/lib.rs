//! Seasonal Portfolio Core
//!
//! Platform-agnostic logic for the seasonal portfolio site: the theme and
//! ambient-audio preference store, palettes, decorative layers, bundled
//! content and the offline contact form. This crate has no browser
//! dependencies; the web crate supplies a [`PreferenceStorage`] backed by
//! `localStorage`.

pub mod ambient;
pub mod contact;
pub mod content;
pub mod decor;
pub mod layout;
pub mod palette;
pub mod prefs;
pub mod season;
pub mod storage;
pub mod typewriter;

// Re-export commonly used types
pub use ambient::{Playback, track_for};
pub use contact::{
    CONFETTI_MS, CONTACT_FIELDS, ContactField, ContactForm, ContactState, FieldError,
    SUBMIT_DELAY_MS, SubmitStatus,
};
pub use content::{
    About, ContactChannel, ContentError, Experience, PROJECT_FILTERS, PortfolioContent, Profile,
    Project, ProjectCategory, ProjectFilter, Skill, SkillCategory, SocialLink,
};
pub use decor::{
    DEFAULT_DECOR_SEED, EffectLayer, MIST_BANDS, MistBand, Particle, Petal, SLIDE_INTERVAL_MS,
    backdrop_images, layers_for, next_slide, sakura_petals,
};
pub use layout::{SECTIONS, Section, is_scrolled, orbit_offset, scroll_progress};
pub use palette::Palette;
pub use prefs::{
    AUDIO_KEY, DEFAULT_VOLUME, Preferences, SEASON_KEY, ThemeStore, VOLUME_KEY, clamp_volume,
};
pub use season::{ParseSeasonError, SEASONS, Season};
pub use storage::{MemoryStorage, MemoryStorageError, PreferenceStorage};
pub use typewriter::Typewriter;
