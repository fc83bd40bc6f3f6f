pub use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent};
pub use yew::classes;
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Classes, Html, Properties, html};
pub use yew::{use_effect_with, use_memo, use_state};

use portfolio_core::Palette;

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

/// Text filled with the season's accent gradient.
#[must_use]
pub fn gradient_text(palette: Palette) -> Classes {
    classes!("bg-clip-text", "text-transparent", palette.accent_classes())
}

/// Inline width for a bar filled to `percent`.
#[must_use]
pub fn width_style(percent: f64) -> String {
    format!("width:{:.1}%", percent.clamp(0.0, 100.0))
}
