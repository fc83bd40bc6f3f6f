use portfolio_core::{
    DEFAULT_DECOR_SEED, EffectLayer, PROJECT_FILTERS, PortfolioContent, SEASONS, Season,
    backdrop_images, layers_for, next_slide, sakura_petals, track_for,
};
use std::collections::HashSet;

#[test]
fn slideshow_cycles_through_every_backdrop() {
    for season in SEASONS {
        let images = backdrop_images(season);
        let mut seen = HashSet::new();
        let mut idx = 0;
        for _ in 0..images.len() {
            seen.insert(images[idx]);
            idx = next_slide(idx, images.len());
        }
        assert_eq!(seen.len(), images.len());
        assert_eq!(idx, 0);
    }
}

#[test]
fn rainy_and_spring_share_rain_but_not_the_rest() {
    let spring: HashSet<_> = layers_for(Season::Spring).iter().collect();
    let rainy: HashSet<_> = layers_for(Season::Rainy).iter().collect();
    let shared: Vec<_> = spring.intersection(&rainy).collect();
    assert_eq!(shared, vec![&&EffectLayer::RainDrops]);
}

#[test]
fn layer_counts_match_generated_particles() {
    let all_layers: HashSet<EffectLayer> = SEASONS
        .iter()
        .flat_map(|s| layers_for(*s).iter().copied())
        .collect();
    for layer in all_layers {
        assert_eq!(
            layer.particles(DEFAULT_DECOR_SEED).len(),
            layer.particle_count()
        );
    }
}

#[test]
fn petals_are_stable_between_renders() {
    assert_eq!(
        sakura_petals(DEFAULT_DECOR_SEED),
        sakura_petals(DEFAULT_DECOR_SEED)
    );
}

#[test]
fn each_filter_partitions_the_gallery() {
    let content = PortfolioContent::bundled();
    let total: usize = PROJECT_FILTERS[1..]
        .iter()
        .map(|f| content.projects_in(*f).count())
        .sum();
    assert_eq!(total, content.projects_in(PROJECT_FILTERS[0]).count());
}

#[test]
fn winter_track_is_lowercase_file() {
    assert_eq!(track_for(Season::Winter), "Music/winter.mp3");
}
