use crate::components::theme_switcher::ThemeSwitcher;
use crate::components::ui::foundation as f;
use crate::hooks::use_scroll;
use crate::theme::use_theme;
use portfolio_core::{PortfolioContent, SECTIONS, Section};

fn nav_link(section: Section, on_navigate: &f::Callback<Section>, class: &'static str) -> f::Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        f::Callback::from(move |e: f::MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };
    f::html! {
        <li key={section.anchor()}>
            <a class={class} href={section.href()} onclick={onclick}>{ section.label() }</a>
        </li>
    }
}

/// Fixed top bar with section links, theme controls and scroll progress.
#[f::function_component(Navbar)]
pub fn navbar() -> f::Html {
    let content = PortfolioContent::bundled();
    let palette = use_theme().palette();
    let scroll = use_scroll();
    let menu_open = f::use_state(|| false);

    let on_navigate = {
        let menu_open = menu_open.clone();
        f::Callback::from(move |section: Section| {
            crate::dom::scroll_to_section(section.anchor());
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        f::Callback::from(move |_: f::MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_class = f::classes!(
        "navbar",
        "fixed",
        "top-0",
        "inset-x-0",
        "z-40",
        "transition-all",
        "duration-300",
        if scroll.scrolled() {
            f::classes!("navbar--scrolled", "bg-white/80", "backdrop-blur-md", "shadow-lg")
        } else {
            f::classes!("bg-transparent")
        }
    );
    let brand_class = f::classes!("text-2xl", "font-bold", f::gradient_text(palette));
    let menu_icon = if *menu_open { "✕" } else { "☰" };
    let progress_class = f::classes!("scroll-progress", "h-1", palette.accent_classes());

    f::html! {
        <nav class={nav_class} aria-label="Primary">
            <div class="container mx-auto flex items-center justify-between px-6 py-4">
                <a class={brand_class} href={Section::Home.href()}>{ content.profile.brand.clone() }</a>
                <ul class="hidden md:flex items-center gap-8">
                    { for SECTIONS.iter().map(|&s| nav_link(s, &on_navigate, "nav-link font-medium hover:opacity-70")) }
                </ul>
                <div class="flex items-center gap-4">
                    <ThemeSwitcher />
                    <ul class="hidden lg:flex items-center gap-3">
                        { for content.socials.iter().map(|social| f::html! {
                            <li key={social.name.clone()}>
                                <a
                                    class="social-link text-sm hover:opacity-70"
                                    href={social.url.clone()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={social.name.clone()}
                                >
                                    { social.name.clone() }
                                </a>
                            </li>
                        }) }
                    </ul>
                    <button
                        type="button"
                        class="navbar__menu-toggle md:hidden p-2"
                        aria-label="Toggle navigation"
                        aria-controls="mobile-menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        { menu_icon }
                    </button>
                </div>
            </div>
            if *menu_open {
                <ul id="mobile-menu" class="md:hidden flex flex-col gap-2 px-6 pb-4 bg-white/95">
                    { for SECTIONS.iter().map(|&s| nav_link(s, &on_navigate, "nav-link block py-2")) }
                </ul>
            }
            <div
                class="h-1 w-full bg-transparent"
                role="progressbar"
                aria-label="Scroll progress"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={format!("{:.0}", scroll.progress)}
            >
                <div class={progress_class} style={f::width_style(scroll.progress)}></div>
            </div>
        </nav>
    }
}
