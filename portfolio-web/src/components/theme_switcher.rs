use crate::components::ui::Range;
use crate::components::ui::foundation as f;
use crate::theme::use_theme;
use portfolio_core::{SEASONS, Season};

const fn season_icon(season: Season) -> &'static str {
    match season {
        Season::Spring => "🌸",
        Season::Summer => "☀️",
        Season::Autumn => "🍂",
        Season::Winter => "❄️",
        Season::Rainy => "🌧️",
    }
}

const fn audio_title(enabled: bool) -> &'static str {
    if enabled {
        "Mute ambient"
    } else {
        "Enable ambient"
    }
}

/// Season dropdown plus the ambient audio controls.
#[f::function_component(ThemeSwitcher)]
pub fn theme_switcher() -> f::Html {
    let theme = use_theme();
    let open = f::use_state(|| false);
    let season = theme.season();
    let enabled = theme.prefs.audio_enabled;
    let audio_icon = if enabled { "🔊" } else { "🔇" };

    let toggle_open = {
        let open = open.clone();
        f::Callback::from(move |_: f::MouseEvent| open.set(!*open))
    };

    let toggle_audio = {
        let on_audio = theme.on_audio.clone();
        f::Callback::from(move |_: f::MouseEvent| on_audio.emit(!enabled))
    };

    let options = SEASONS.iter().map(|&option| {
        let onclick = {
            let on_season = theme.on_season.clone();
            let open = open.clone();
            f::Callback::from(move |_: f::MouseEvent| {
                on_season.emit(option);
                open.set(false);
            })
        };
        let active = option == season;
        let class = f::classes!(
            "season-option",
            "flex",
            "w-full",
            "items-center",
            "gap-2",
            "px-4",
            "py-2",
            "text-left",
            active.then_some("font-semibold")
        );
        f::html! {
            <li key={option.as_str()} role="none">
                <button
                    type="button"
                    role="menuitemradio"
                    class={class}
                    data-season={option.as_str()}
                    aria-checked={active.to_string()}
                    onclick={onclick}
                >
                    <span aria-hidden="true">{ season_icon(option) }</span>
                    { option.label() }
                </button>
            </li>
        }
    });

    let button_class = f::classes!(
        "theme-switcher__toggle",
        "flex",
        "items-center",
        "gap-2",
        "px-3",
        "py-2",
        "rounded-full",
        "text-white",
        theme.palette().accent_classes()
    );

    f::html! {
        <div class="theme-switcher relative flex items-center gap-2">
            <button
                type="button"
                class={button_class}
                aria-haspopup="menu"
                aria-expanded={open.to_string()}
                onclick={toggle_open}
            >
                <span aria-hidden="true">{ season_icon(season) }</span>
                <span class="theme-switcher__label">{ season.label() }</span>
            </button>
            if *open {
                <ul
                    class="theme-switcher__menu absolute right-0 top-full mt-2 w-40 rounded-xl bg-white shadow-xl py-1 z-50"
                    role="menu"
                >
                    { for options }
                </ul>
            }
            <button
                type="button"
                class="theme-switcher__audio p-2 rounded-full bg-white/70 hover:bg-white"
                title={audio_title(enabled)}
                aria-label={audio_title(enabled)}
                aria-pressed={enabled.to_string()}
                onclick={toggle_audio}
            >
                <span aria-hidden="true">{ audio_icon }</span>
            </button>
            if enabled {
                <Range
                    class={f::classes!("w-24")}
                    value={theme.prefs.volume}
                    min={0.0}
                    max={1.0}
                    step={0.05}
                    title="Ambient volume"
                    on_change={theme.on_volume.clone()}
                />
            }
        </div>
    }
}
