use crate::components::ui::foundation as f;
use crate::hooks::use_interval;
use crate::theme::use_theme;
use portfolio_core::{
    DEFAULT_DECOR_SEED, EffectLayer, SLIDE_INTERVAL_MS, Season, backdrop_images, layers_for,
    next_slide,
};
use std::rc::Rc;
use yew::{Reducible, use_reducer};

/// Index of the visible slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Slide(usize);

impl Reducible for Slide {
    /// Number of slides in the deck.
    type Action = usize;

    fn reduce(self: Rc<Self>, len: usize) -> Rc<Self> {
        Rc::new(Self(next_slide(self.0, len)))
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct SlideshowProps {
    pub season: Season,
}

/// Cross-fading photographs for one season. Key it by season so a change of
/// season starts again from the first image.
#[f::function_component(Slideshow)]
pub fn slideshow(props: &SlideshowProps) -> f::Html {
    let images = backdrop_images(props.season);
    let slide = use_reducer(Slide::default);

    {
        let dispatcher = slide.dispatcher();
        let len = images.len();
        use_interval(
            SLIDE_INTERVAL_MS,
            (props.season, len),
            f::Callback::from(move |()| dispatcher.dispatch(len)),
        );
    }

    f::html! {
        <div class="slideshow absolute inset-0">
            { for images.iter().enumerate().map(|(index, src)| {
                let class = f::classes!(
                    "slideshow__image",
                    "absolute",
                    "inset-0",
                    "w-full",
                    "h-full",
                    "object-cover",
                    "transition-opacity",
                    "duration-1000",
                    if index == slide.0 { "opacity-100" } else { "opacity-0" }
                );
                f::html! { <img key={*src} class={class} src={*src} alt="" aria-hidden="true" /> }
            }) }
        </div>
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct EffectLayerProps {
    pub layer: EffectLayer,
}

/// One animated overlay; particle styles are seeded so every render agrees.
#[f::function_component(EffectLayerView)]
pub fn effect_layer_view(props: &EffectLayerProps) -> f::Html {
    let layer = props.layer;
    let particles = f::use_memo(layer, |layer| layer.particles(DEFAULT_DECOR_SEED));
    let class = f::classes!("fx-layer", "absolute", "inset-0", "overflow-hidden", layer.class_name());
    f::html! {
        <div class={class} aria-hidden="true">
            { for particles.iter().map(|particle| f::html! {
                <span class="fx-particle" style={particle.style(layer)}></span>
            }) }
        </div>
    }
}

#[f::function_component(SeasonalBackgrounds)]
pub fn seasonal_backgrounds() -> f::Html {
    let season = use_theme().season();
    f::html! {
        <div class="seasonal-backgrounds fixed inset-0 -z-10 pointer-events-none" data-season={season.as_str()}>
            <Slideshow key={season.as_str()} {season} />
            <div class="seasonal-backgrounds__overlay absolute inset-0 bg-gradient-to-b from-white/70 via-white/50 to-white/80"></div>
            { for layers_for(season).iter().map(|&layer| f::html! {
                <EffectLayerView key={layer.class_name()} {layer} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_reducer_wraps() {
        let slide = Rc::new(Slide(2)).reduce(3);
        assert_eq!(*slide, Slide(0));
        let slide = slide.reduce(3);
        assert_eq!(*slide, Slide(1));
    }

    #[test]
    fn single_slide_stays_put() {
        assert_eq!(*Rc::new(Slide(0)).reduce(1), Slide(0));
    }
}
