//! Decorative backdrop: photo slideshow, seasonal effect layers and sakura petals
//!
//! Particle parameters come from a seeded ChaCha stream so a server render and
//! the hydrated client agree on every position.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::season::Season;

/// Delay between backdrop photographs.
pub const SLIDE_INTERVAL_MS: u32 = 3_000;
pub const PETAL_COUNT: usize = 40;
/// Seed used by the page; tests pick their own.
pub const DEFAULT_DECOR_SEED: u64 = 0x5EA5_0A11;

const SPRING_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1462275646964-a0e3386b89fa?q=80&w=3840",
    "https://plus.unsplash.com/premium_photo-1664008141848-5366dafbbe2b?w=3840",
    "https://images.unsplash.com/photo-1620694563886-c3a80ec55f41?q=80&w=3840",
];
const SUMMER_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1508804185872-d7badad00f7d?w=3840&q=80",
    "https://plus.unsplash.com/premium_photo-1681255760839-6581e2eb3e96?q=80&w=3840",
    "https://plus.unsplash.com/premium_photo-1680995369588-502d70f0e3c8?q=80&w=3840",
];
const AUTUMN_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb?w=3840&q=80",
    "https://images.unsplash.com/photo-1476842321362-f5bb3a58ab25?q=80&w=3840",
    "https://plus.unsplash.com/premium_photo-1668967516060-624b8a7021f4?q=80&w=3840",
];
const WINTER_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1519681393784-d120267933ba?w=3840&q=80",
    "https://images.unsplash.com/photo-1489674267075-cee793167910?q=80&w=3840",
    "https://plus.unsplash.com/premium_photo-1670493556860-13e006e6faa4?q=80&w=3840",
];
const RAINY_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1563389843516-4a7b39dce10d?q=80&w=1100",
    "https://images.unsplash.com/photo-1508556919487-845f191e5742?q=80&w=3840",
    "https://images.unsplash.com/photo-1503435824048-a799a3a84bf7?q=80&w=3840",
];

/// Backdrop photographs for a season, in display order.
#[must_use]
pub const fn backdrop_images(season: Season) -> &'static [&'static str] {
    match season {
        Season::Spring => &SPRING_IMAGES,
        Season::Summer => &SUMMER_IMAGES,
        Season::Autumn => &AUTUMN_IMAGES,
        Season::Winter => &WINTER_IMAGES,
        Season::Rainy => &RAINY_IMAGES,
    }
}

/// Index of the slide after `current`, wrapping. Lists of zero or one image stay put.
#[must_use]
pub const fn next_slide(current: usize, len: usize) -> usize {
    if len <= 1 { 0 } else { (current + 1) % len }
}

/// Animated overlay drawn above the backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectLayer {
    RainDrops,
    Lightning,
    SnowFall,
    FireCamp,
    SunRays,
    HeatHaze,
    AutumnLeaves,
    SpringPollen,
    Aurora,
}

const SPRING_LAYERS: [EffectLayer; 2] = [EffectLayer::RainDrops, EffectLayer::SpringPollen];
const SUMMER_LAYERS: [EffectLayer; 2] = [EffectLayer::SunRays, EffectLayer::HeatHaze];
const AUTUMN_LAYERS: [EffectLayer; 1] = [EffectLayer::AutumnLeaves];
const WINTER_LAYERS: [EffectLayer; 3] = [
    EffectLayer::SnowFall,
    EffectLayer::FireCamp,
    EffectLayer::Aurora,
];
const RAINY_LAYERS: [EffectLayer; 2] = [EffectLayer::RainDrops, EffectLayer::Lightning];

/// Effect layers for a season, bottom to top.
#[must_use]
pub const fn layers_for(season: Season) -> &'static [EffectLayer] {
    match season {
        Season::Spring => &SPRING_LAYERS,
        Season::Summer => &SUMMER_LAYERS,
        Season::Autumn => &AUTUMN_LAYERS,
        Season::Winter => &WINTER_LAYERS,
        Season::Rainy => &RAINY_LAYERS,
    }
}

/// Lightning draws three full-screen flashes followed by two bolts.
pub const LIGHTNING_FLASHES: usize = 3;

impl EffectLayer {
    #[must_use]
    pub const fn particle_count(self) -> usize {
        match self {
            Self::RainDrops => 40,
            Self::Lightning => LIGHTNING_FLASHES + 2,
            Self::SnowFall => 60,
            Self::FireCamp | Self::Aurora => 2,
            Self::SunRays => 6,
            Self::HeatHaze => 3,
            Self::AutumnLeaves => 35,
            Self::SpringPollen => 30,
        }
    }

    /// Stylesheet hook for the layer container.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::RainDrops => "fx-rain",
            Self::Lightning => "fx-lightning",
            Self::SnowFall => "fx-snow",
            Self::FireCamp => "fx-fire",
            Self::SunRays => "fx-sun",
            Self::HeatHaze => "fx-haze",
            Self::AutumnLeaves => "fx-leaves",
            Self::SpringPollen => "fx-pollen",
            Self::Aurora => "fx-aurora",
        }
    }

    /// CSS unit of [`Particle::top`] for this layer.
    #[must_use]
    pub const fn top_unit(self) -> &'static str {
        match self {
            Self::RainDrops | Self::SnowFall | Self::AutumnLeaves | Self::Lightning => "vh",
            Self::SpringPollen => "%",
            Self::FireCamp | Self::SunRays | Self::HeatHaze | Self::Aurora => "px",
        }
    }

    /// Generate this layer's particles from `seed`.
    #[must_use]
    pub fn particles(self, seed: u64) -> Vec<Particle> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ self as u64);
        (0..self.particle_count())
            .map(|i| self.particle(i, &mut rng))
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn particle(self, index: usize, rng: &mut ChaCha8Rng) -> Particle {
        let i = index as f64;
        let mut p = Particle::default();
        match self {
            Self::RainDrops => {
                p.left = rng.gen_range(0.0..100.0);
                p.top = -10.0 - rng.gen_range(0.0..40.0);
                p.duration_s = 1.8 + rng.gen_range(0.0..1.0);
            }
            Self::SnowFall => {
                p.left = rng.gen_range(0.0..100.0);
                p.top = -10.0 - rng.gen_range(0.0..40.0);
                p.duration_s = 6.0 + rng.gen_range(0.0..5.0);
                p.drift_px = signed(rng, 20.0);
            }
            Self::AutumnLeaves => {
                p.left = rng.gen_range(0.0..100.0);
                p.top = -10.0 - rng.gen_range(0.0..40.0);
                p.duration_s = 7.0 + rng.gen_range(0.0..5.0);
                p.drift_px = signed(rng, 30.0);
                p.rotate_deg = 180.0;
            }
            Self::SpringPollen => {
                p.left = rng.gen_range(0.0..100.0);
                p.top = rng.gen_range(0.0..100.0);
                p.duration_s = 6.0 + rng.gen_range(0.0..4.0);
                p.delay_s = i * 0.1;
                p.drift_px = POLLEN_DRIFT_PX;
            }
            Self::Lightning if index < LIGHTNING_FLASHES => {
                p.duration_s = 0.4;
                p.delay_s = 3.0 + i * 2.0;
                p.repeat_delay_s = 6.0 + i;
            }
            Self::Lightning => {
                let bolt = (index - LIGHTNING_FLASHES) as f64;
                p.left = 20.0 + bolt * 40.0;
                p.top = -10.0;
                p.duration_s = 0.25;
                p.delay_s = 4.0 + bolt * 3.0;
                p.repeat_delay_s = 8.0;
            }
            Self::SunRays => {
                p.rotate_deg = 10.0 * i;
                p.duration_s = 2.0 + i * 0.2;
            }
            Self::HeatHaze => p.duration_s = 4.0 + i,
            Self::Aurora => {
                p.top = 10.0 + i * 60.0;
                p.duration_s = 10.0 + i * 2.0;
            }
            Self::FireCamp => p.duration_s = if index == 0 { 1.2 } else { 1.0 },
        }
        p
    }
}

const POLLEN_DRIFT_PX: f64 = 20.0;

fn signed(rng: &mut ChaCha8Rng, magnitude: f64) -> f64 {
    if rng.gen_bool(0.5) { magnitude } else { -magnitude }
}

/// One animated element of an effect layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    /// Horizontal position in percent of the viewport.
    pub left: f64,
    /// Vertical start, unit given by [`EffectLayer::top_unit`].
    pub top: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub repeat_delay_s: f64,
    pub drift_px: f64,
    pub rotate_deg: f64,
}

impl Particle {
    /// Length of one animation iteration: the visible run plus the pause
    /// before it repeats. Keyframes for repeating layers keep the visible
    /// part at the start of the cycle.
    #[must_use]
    pub fn cycle_s(&self) -> f64 {
        self.duration_s + self.repeat_delay_s
    }

    /// Inline style consumed by the layer keyframes.
    #[must_use]
    pub fn style(&self, layer: EffectLayer) -> String {
        format!(
            "left:{:.2}%;top:{:.2}{};animation-duration:{:.2}s;animation-delay:{:.2}s;--drift:{:.0}px;--spin:{:.0}deg",
            self.left,
            self.top,
            layer.top_unit(),
            self.cycle_s(),
            self.delay_s,
            self.drift_px,
            self.rotate_deg,
        )
    }
}

/// Falling cherry-blossom petal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Petal {
    pub start_vw: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub scale: f64,
    pub opacity: f64,
    pub drift_px: f64,
    pub rotate_deg: f64,
    pub depth: f64,
}

impl Petal {
    /// Total start delay; deeper petals start later.
    #[must_use]
    pub fn total_delay_s(&self) -> f64 {
        self.delay_s + self.depth * 2.0
    }

    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left:{:.2}vw;animation-duration:{:.2}s;animation-delay:{:.2}s;--petal-opacity:{:.2};--drift:{:.0}px;--spin:{:.0}deg;--scale:{:.2}",
            self.start_vw,
            self.duration_s,
            self.total_delay_s(),
            self.opacity,
            self.drift_px,
            self.rotate_deg,
            self.scale,
        )
    }
}

/// Generate the sakura layer's petals.
#[must_use]
pub fn sakura_petals(seed: u64) -> Vec<Petal> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..PETAL_COUNT)
        .map(|_| {
            let start_vw = rng.gen_range(0.0..100.0);
            let delay_s = rng.gen_range(0.0..6.0);
            let duration_s = 8.0 + rng.gen_range(0.0..8.0);
            let scale = 0.6 + rng.gen_range(0.0..0.9);
            let opacity = 0.25 + rng.gen_range(0.0..0.35);
            let drift = 20.0 + rng.gen_range(0.0..60.0);
            let rotate_deg = 120.0 + rng.gen_range(0.0..240.0);
            let depth = rng.gen_range(0.0..1.0);
            let drift_px = if rng.gen_bool(0.5) { drift } else { -drift };
            Petal {
                start_vw,
                delay_s,
                duration_s,
                scale,
                opacity,
                drift_px,
                rotate_deg,
                depth,
            }
        })
        .collect()
}

/// Slow drifting haze band behind the petals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MistBand {
    pub top_pct: u8,
    pub blur_px: u8,
    pub opacity: f64,
}

pub const MIST_BANDS: [MistBand; 2] = [
    MistBand {
        top_pct: 15,
        blur_px: 20,
        opacity: 0.35,
    },
    MistBand {
        top_pct: 60,
        blur_px: 26,
        opacity: 0.25,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::SEASONS;

    #[test]
    fn slideshow_wraps_and_single_images_hold() {
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(next_slide(2, 3), 0);
        assert_eq!(next_slide(0, 1), 0);
        assert_eq!(next_slide(5, 0), 0);
    }

    #[test]
    fn each_season_has_three_backdrops_and_layers() {
        for season in SEASONS {
            assert_eq!(backdrop_images(season).len(), 3);
            assert!(!layers_for(season).is_empty());
        }
        assert_eq!(
            layers_for(Season::Winter),
            &[EffectLayer::SnowFall, EffectLayer::FireCamp, EffectLayer::Aurora]
        );
    }

    #[test]
    fn particle_generation_is_seeded() {
        let a = EffectLayer::SnowFall.particles(7);
        let b = EffectLayer::SnowFall.particles(7);
        let c = EffectLayer::SnowFall.particles(8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 60);
    }

    #[test]
    fn falling_particles_start_above_the_viewport() {
        for layer in [
            EffectLayer::RainDrops,
            EffectLayer::SnowFall,
            EffectLayer::AutumnLeaves,
        ] {
            for p in layer.particles(99) {
                assert!((0.0..100.0).contains(&p.left));
                assert!(p.top <= -10.0 && p.top > -50.0);
            }
        }
    }

    #[test]
    fn lightning_splits_flashes_and_bolts() {
        let parts = EffectLayer::Lightning.particles(1);
        assert_eq!(parts.len(), 5);
        assert!((parts[0].delay_s - 3.0).abs() < f64::EPSILON);
        assert!((parts[3].left - 20.0).abs() < f64::EPSILON);
        assert!((parts[4].left - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lightning_cycles_include_the_pause() {
        let parts = EffectLayer::Lightning.particles(1);
        let flash = parts[0].style(EffectLayer::Lightning);
        assert!(flash.contains("animation-duration:6.40s"), "{flash}");
        assert!(flash.contains("animation-delay:3.00s"));
        let bolt = parts[3].style(EffectLayer::Lightning);
        assert!(bolt.contains("animation-duration:8.25s"), "{bolt}");
        assert!(!bolt.contains("repeat-delay"));
    }

    #[test]
    fn pollen_drifts_and_rays_fan_out() {
        for p in EffectLayer::SpringPollen.particles(DEFAULT_DECOR_SEED) {
            assert!(p.style(EffectLayer::SpringPollen).contains("--drift:20px"));
        }
        let rays = EffectLayer::SunRays.particles(DEFAULT_DECOR_SEED);
        assert!(rays[0].style(EffectLayer::SunRays).ends_with("--spin:0deg"));
        assert!(rays[1].style(EffectLayer::SunRays).ends_with("--spin:10deg"));
        assert!(rays[5].style(EffectLayer::SunRays).ends_with("--spin:50deg"));
    }

    #[test]
    fn petals_respect_documented_ranges() {
        let petals = sakura_petals(DEFAULT_DECOR_SEED);
        assert_eq!(petals.len(), PETAL_COUNT);
        for petal in petals {
            assert!((0.0..100.0).contains(&petal.start_vw));
            assert!((8.0..16.0).contains(&petal.duration_s));
            assert!((0.6..1.5).contains(&petal.scale));
            assert!((0.25..0.6).contains(&petal.opacity));
            assert!((20.0..80.0).contains(&petal.drift_px.abs()));
            assert!((120.0..360.0).contains(&petal.rotate_deg));
            assert!(petal.total_delay_s() < 8.0);
        }
    }

    #[test]
    fn particle_style_uses_layer_units() {
        let p = Particle {
            left: 12.5,
            top: -20.0,
            duration_s: 2.0,
            ..Particle::default()
        };
        let style = p.style(EffectLayer::RainDrops);
        assert!(style.starts_with("left:12.50%;top:-20.00vh;"));
        assert!(style.contains("animation-duration:2.00s"));
    }
}
