//! Display colors derived from the active season
use crate::season::Season;

/// Gradient utility classes applied to page backdrops and accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub accent: &'static str,
}

impl Palette {
    #[must_use]
    pub const fn for_season(season: Season) -> Self {
        match season {
            Season::Spring => Self {
                bg: "from-pink-50 via-rose-50 to-purple-50",
                accent: "from-pink-500 to-rose-600",
            },
            Season::Summer => Self {
                bg: "from-yellow-50 via-amber-50 to-orange-50",
                accent: "from-yellow-500 to-orange-600",
            },
            Season::Autumn => Self {
                bg: "from-orange-50 via-amber-50 to-rose-50",
                accent: "from-orange-600 to-amber-700",
            },
            Season::Winter => Self {
                bg: "from-blue-50 via-sky-50 to-cyan-50",
                accent: "from-blue-600 to-cyan-600",
            },
            Season::Rainy => Self {
                bg: "from-slate-50 via-blue-50 to-slate-100",
                accent: "from-slate-600 to-blue-700",
            },
        }
    }

    /// Classes for a left-to-right accent gradient.
    #[must_use]
    pub fn accent_classes(&self) -> String {
        format!("bg-gradient-to-r {}", self.accent)
    }

    /// Classes for the diagonal page backdrop.
    #[must_use]
    pub fn backdrop_classes(&self) -> String {
        format!("bg-gradient-to-br {}", self.bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::SEASONS;
    use std::collections::HashSet;

    #[test]
    fn every_season_has_a_distinct_palette() {
        let accents: HashSet<_> = SEASONS
            .iter()
            .map(|s| Palette::for_season(*s).accent)
            .collect();
        assert_eq!(accents.len(), SEASONS.len());
    }

    #[test]
    fn default_season_maps_to_spring_colors() {
        let palette = Palette::for_season(Season::default());
        assert_eq!(palette.bg, "from-pink-50 via-rose-50 to-purple-50");
        assert_eq!(palette.accent_classes(), "bg-gradient-to-r from-pink-500 to-rose-600");
    }
}
