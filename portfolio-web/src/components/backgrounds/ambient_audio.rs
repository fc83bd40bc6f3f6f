use crate::components::ui::foundation as f;
use crate::dom::js_error_message;
use crate::theme::use_theme;
use portfolio_core::Playback;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlMediaElement;
use yew::use_node_ref;

/// Push a playback decision into the media element. Autoplay refusals are
/// expected until the visitor interacts with the page, so they only log.
fn apply(media: &HtmlMediaElement, playback: Playback) {
    media.set_loop(true);
    media.set_volume(playback.volume());
    match playback {
        Playback::Pause => {
            if let Err(err) = media.pause() {
                log::debug!("ambient pause failed: {}", js_error_message(&err));
            }
        }
        Playback::Play { .. } => match media.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::debug!("ambient playback refused: {}", js_error_message(&err));
                }
            }),
            Err(err) => log::debug!("ambient playback failed: {}", js_error_message(&err)),
        },
    }
}

/// Hidden looping `<audio>` for the current season's track.
#[f::function_component(AmbientAudio)]
pub fn ambient_audio() -> f::Html {
    let theme = use_theme();
    let node = use_node_ref();
    let src = theme.track_url();
    let playback = theme.playback();

    {
        let node = node.clone();
        f::use_effect_with((playback, src.clone()), move |(playback, _)| {
            if let Some(media) = node.cast::<HtmlMediaElement>() {
                apply(&media, *playback);
            }
        });
    }

    f::html! {
        <audio ref={node} class="ambient-audio hidden" src={src} preload="none" aria-hidden="true" />
    }
}
