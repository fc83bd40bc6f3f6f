use crate::components::ui::foundation as f;
use portfolio_core::{DEFAULT_DECOR_SEED, MIST_BANDS, MistBand, sakura_petals};

fn mist_style(band: MistBand) -> String {
    format!(
        "top:{}%;filter:blur({}px);opacity:{:.2}",
        band.top_pct, band.blur_px, band.opacity
    )
}

/// Cherry-blossom petals and mist drawn in every season.
#[f::function_component(SakuraBackground)]
pub fn sakura_background() -> f::Html {
    let petals = f::use_memo((), |_| sakura_petals(DEFAULT_DECOR_SEED));
    f::html! {
        <div class="sakura fixed inset-0 z-0 pointer-events-none overflow-hidden" aria-hidden="true">
            { for MIST_BANDS.iter().map(|&band| f::html! {
                <div class="sakura__mist absolute inset-x-0 h-40 bg-white/40" style={mist_style(band)}></div>
            }) }
            { for petals.iter().map(|petal| f::html! {
                <span class="sakura__petal absolute -top-8" style={petal.style()}></span>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mist_style_positions_band() {
        assert_eq!(mist_style(MIST_BANDS[0]), "top:15%;filter:blur(20px);opacity:0.35");
    }
}
