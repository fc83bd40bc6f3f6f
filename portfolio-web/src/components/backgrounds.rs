//! Decorative layers behind the page content and the ambient soundtrack.
pub mod ambient_audio;
pub mod sakura;
pub mod seasonal;

pub use ambient_audio::AmbientAudio;
pub use sakura::SakuraBackground;
pub use seasonal::{EffectLayerView, SeasonalBackgrounds, Slideshow};
