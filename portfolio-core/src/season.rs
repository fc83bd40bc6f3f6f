//! Seasonal display modes
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Theme selected by the visitor; drives palette, backdrop and ambient track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
    Rainy,
}

/// Every season in switcher order.
pub const SEASONS: [Season; 5] = [
    Season::Spring,
    Season::Summer,
    Season::Autumn,
    Season::Winter,
    Season::Rainy,
];

impl Season {
    /// Identifier used for persistence and `data-season` attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
            Self::Rainy => "rainy",
        }
    }

    /// Human readable label for the theme switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
            Self::Rainy => "Rainy",
        }
    }

    /// Resolve a stored value, falling back to the default season.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<Self>) {
            Some(Ok(season)) => season,
            Some(Err(err)) => {
                log::debug!("ignoring stored season: {err}");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown season `{0}`")]
pub struct ParseSeasonError(pub String);

impl FromStr for Season {
    type Err = ParseSeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SEASONS
            .into_iter()
            .find(|season| season.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseSeasonError(s.to_string()))
    }
}
