use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, Window};

/// Browser `window`, if running in one.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Set an attribute on `<html>`, used for season-scoped CSS.
pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute(name, value);
    }
}

/// Smooth-scroll (per stylesheet) to the element with `id`.
pub fn scroll_to_section(id: &str) {
    if let Some(el) = document().and_then(|doc| doc.get_element_by_id(id)) {
        el.scroll_into_view();
    }
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// `(scroll_top, scroll_height, viewport_height)` of the page.
#[must_use]
pub fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let win = window()?;
    let top = win.scroll_y().ok()?;
    let height = f64::from(win.document()?.document_element()?.scroll_height());
    let viewport = win.inner_height().ok()?.as_f64()?;
    Some((top, height, viewport))
}

#[must_use]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn clamp_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Repeating timer cleared on drop.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Schedule `tick` every `period_ms`. `None` outside a browser.
    pub fn new(period_ms: u32, tick: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::<dyn FnMut()>::new(tick);
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                clamp_ms(period_ms),
            )
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

/// One-shot timer; dropping it before it fires cancels it.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: u32, fire: impl FnOnce() + 'static) -> Option<Self> {
        let closure: Closure<dyn FnMut()> = Closure::once(fire);
        let id = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                clamp_ms(delay_ms),
            )
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// DOM event subscription removed on drop.
pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
