//! Timer and scroll hooks built on the RAII wrappers in [`crate::dom`].
//!
//! Effects never run during server-side rendering, so these hooks are inert
//! there and the first paint uses their initial values.
use crate::dom::{EventListener, Interval, Timeout};
use portfolio_core::{is_scrolled, scroll_progress};
use yew::prelude::*;

/// Emit `on_tick` every `period_ms` while mounted.
///
/// The timer restarts whenever `deps` changes; `on_tick` is captured at that
/// point, so pass a dispatcher or a callback that does not read stale state.
#[hook]
pub fn use_interval<D>(period_ms: u32, deps: D, on_tick: Callback<()>)
where
    D: PartialEq + 'static,
{
    use_effect_with(deps, move |_| {
        let interval = Interval::new(period_ms, move || on_tick.emit(()));
        move || drop(interval)
    });
}

/// Emit `on_fire` once, `delay_ms` after `armed` turns `true`.
///
/// Disarming or unmounting first cancels the pending timer.
#[hook]
pub fn use_timeout_when(armed: bool, delay_ms: u32, on_fire: Callback<()>) {
    use_effect_with(armed, move |armed| {
        let timeout = armed
            .then(|| Timeout::new(delay_ms, move || on_fire.emit(())))
            .flatten();
        move || drop(timeout)
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub top: f64,
    pub progress: f64,
}

impl ScrollState {
    #[must_use]
    pub fn from_metrics(top: f64, height: f64, viewport: f64) -> Self {
        Self {
            top,
            progress: scroll_progress(top, height, viewport),
        }
    }

    #[must_use]
    pub fn scrolled(self) -> bool {
        is_scrolled(self.top)
    }
}

/// Window scroll position, refreshed on every `scroll` event.
#[hook]
pub fn use_scroll() -> ScrollState {
    let state = use_state(ScrollState::default);
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let refresh = move || {
                if let Some((top, height, viewport)) = crate::dom::scroll_metrics() {
                    state.set(ScrollState::from_metrics(top, height, viewport));
                }
            };
            refresh();
            let listener = crate::dom::window()
                .and_then(|win| EventListener::new(&win, "scroll", move |_| refresh()));
            move || drop(listener)
        });
    }
    *state
}
