//! Ambient soundtrack selection and playback decisions
use crate::prefs::clamp_volume;
use crate::season::Season;

/// Relative path of the looping track for a season.
///
/// Spring has no recording of its own and shares the autumn track.
#[must_use]
pub const fn track_for(season: Season) -> &'static str {
    match season {
        Season::Spring | Season::Autumn => "Music/Autumn.mp3",
        Season::Summer => "Music/Summer.mp3",
        Season::Winter => "Music/winter.mp3",
        Season::Rainy => "Music/Rainy.mp3",
    }
}

/// What the audio element should do after a preference change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Playback {
    Pause,
    Play { volume: f64 },
}

impl Playback {
    /// Disabled audio pauses regardless of volume; enabled audio plays at the
    /// clamped volume, including silently at zero.
    #[must_use]
    pub fn decide(enabled: bool, volume: f64) -> Self {
        if enabled {
            Self::Play {
                volume: clamp_volume(volume).unwrap_or(0.0),
            }
        } else {
            Self::Pause
        }
    }

    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Play { .. })
    }

    /// Volume to apply to the element; paused elements keep a silent level.
    #[must_use]
    pub const fn volume(self) -> f64 {
        match self {
            Self::Pause => 0.0,
            Self::Play { volume } => volume,
        }
    }
}
