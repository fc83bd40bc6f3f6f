use crate::components::ui::foundation as f;
use crate::theme::use_theme;
use portfolio_core::{PortfolioContent, SECTIONS};

/// Year shown when rendering outside a browser.
pub const FALLBACK_YEAR: u32 = 2024;

fn copyright_year() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::current_year()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        FALLBACK_YEAR
    }
}

#[f::function_component(Footer)]
pub fn footer() -> f::Html {
    let content = PortfolioContent::bundled();
    let palette = use_theme().palette();
    let back_to_top = f::Callback::from(|_: f::MouseEvent| crate::dom::scroll_to_top());
    let brand_class = f::classes!("text-2xl", "font-bold", "mb-4", f::gradient_text(palette));
    let top_class = f::classes!(
        "back-to-top",
        "p-3",
        "rounded-full",
        "text-white",
        "shadow-lg",
        palette.accent_classes()
    );

    f::html! {
        <footer class="site-footer relative z-10 bg-gray-900 text-gray-300 pt-16 pb-8 px-6">
            <div class="container mx-auto grid md:grid-cols-3 gap-12 mb-12">
                <div>
                    <h2 class={brand_class}>{ content.profile.name.clone() }</h2>
                    <p class="text-gray-400">{ content.profile.summary.clone() }</p>
                </div>
                <nav aria-label="Quick links">
                    <h3 class="text-lg font-semibold text-white mb-4">{ "Quick Links" }</h3>
                    <ul class="space-y-2">
                        { for SECTIONS.iter().map(|section| f::html! {
                            <li key={section.anchor()}>
                                <a class="hover:text-white" href={section.href()}>{ section.label() }</a>
                            </li>
                        }) }
                    </ul>
                </nav>
                <div>
                    <h3 class="text-lg font-semibold text-white mb-4">{ "Contact Info" }</h3>
                    <ul class="space-y-2">
                        { for content.contact.iter().map(|channel| f::html! {
                            <li key={channel.title.clone()}>{ channel.value.clone() }</li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="container mx-auto flex flex-wrap items-center justify-between gap-4 border-t border-gray-700 pt-8">
                <p class="text-sm">
                    { format!("© {} {}. All rights reserved.", copyright_year(), content.profile.name) }
                </p>
                <button type="button" class={top_class} aria-label="Back to top" onclick={back_to_top}>
                    { "↑" }
                </button>
            </div>
        </footer>
    }
}
