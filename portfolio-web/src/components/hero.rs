use crate::components::ui::foundation as f;
use crate::dom::Timeout;
use crate::theme::use_theme;
use portfolio_core::typewriter::TYPE_TICK_MS;
use portfolio_core::{PortfolioContent, Section, Typewriter};
use std::rc::Rc;
use yew::{Reducible, use_reducer};

/// Typewriter plus the delay the last step asked for.
#[derive(Clone, PartialEq)]
struct Rotator {
    writer: Typewriter,
    delay_ms: u32,
    step: u64,
}

impl Rotator {
    fn new(phrases: Vec<String>) -> Self {
        Self {
            writer: Typewriter::new(phrases),
            delay_ms: TYPE_TICK_MS,
            step: 0,
        }
    }
}

impl Reducible for Rotator {
    type Action = ();

    fn reduce(self: Rc<Self>, (): ()) -> Rc<Self> {
        let mut next = (*self).clone();
        next.delay_ms = next.writer.tick();
        next.step = next.step.wrapping_add(1);
        Rc::new(next)
    }
}

#[f::function_component(Hero)]
pub fn hero() -> f::Html {
    let profile = &PortfolioContent::bundled().profile;
    let palette = use_theme().palette();
    let rotator = use_reducer(|| Rotator::new(profile.roles.clone()));

    {
        let dispatcher = rotator.dispatcher();
        let delay = rotator.delay_ms;
        f::use_effect_with(rotator.step, move |_| {
            let timeout = Timeout::new(delay, move || dispatcher.dispatch(()));
            move || drop(timeout)
        });
    }

    let contact_click = f::Callback::from(|e: f::MouseEvent| {
        e.prevent_default();
        crate::dom::scroll_to_section(Section::Contact.anchor());
    });

    let name_class = f::classes!(
        "block",
        "text-5xl",
        "md:text-7xl",
        "font-extrabold",
        f::gradient_text(palette)
    );
    let primary_class = f::classes!(
        "px-8",
        "py-3",
        "rounded-full",
        "text-white",
        "font-semibold",
        "shadow-lg",
        palette.accent_classes()
    );

    f::html! {
        <section id={Section::Home.anchor()} class="hero relative min-h-screen flex items-center justify-center px-6">
            <div class="text-center max-w-4xl">
                <h1 class="mb-6">
                    <span class="block text-xl md:text-2xl text-gray-600 mb-2">{ profile.greeting.clone() }</span>
                    <span class={name_class}>{ profile.name.clone() }</span>
                </h1>
                <p class="typewriter text-2xl md:text-3xl font-semibold h-10 mb-6" aria-live="polite">
                    <span class="typewriter__text">{ rotator.writer.text().to_owned() }</span>
                    <span class="typewriter__cursor animate-pulse" aria-hidden="true">{ "|" }</span>
                </p>
                <p class="text-lg text-gray-700 max-w-2xl mx-auto mb-10">{ profile.tagline.clone() }</p>
                <div class="flex flex-wrap justify-center gap-4">
                    <a class={primary_class} href={crate::paths::asset_path(&profile.resume)} download="">
                        { "Download Resume" }
                    </a>
                    <a
                        class="px-8 py-3 rounded-full border-2 border-current font-semibold"
                        href={Section::Contact.href()}
                        onclick={contact_click}
                    >
                        { "Get In Touch" }
                    </a>
                </div>
            </div>
            <a
                class="scroll-indicator absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce"
                href={Section::About.href()}
                aria-label="Scroll down"
            >
                { "↓" }
            </a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotator_advances_and_records_delay() {
        let start = Rc::new(Rotator::new(vec!["Hi".into()]));
        let next = start.reduce(());
        assert_eq!(next.step, 1);
        assert_eq!(next.writer.text(), "H");
        assert_eq!(next.delay_ms, TYPE_TICK_MS);
    }
}
