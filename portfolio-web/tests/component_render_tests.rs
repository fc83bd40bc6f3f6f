use futures::executor::block_on;
use portfolio_core::{Preferences, Season};
use portfolio_web::app::App;
use portfolio_web::components::backgrounds::{AmbientAudio, SakuraBackground, SeasonalBackgrounds};
use portfolio_web::components::contact::Contact;
use portfolio_web::components::footer::{FALLBACK_YEAR, Footer};
use portfolio_web::components::navbar::Navbar;
use portfolio_web::components::projects::Projects;
use portfolio_web::components::skills::Skills;
use portfolio_web::components::theme_switcher::ThemeSwitcher;
use portfolio_web::theme::ThemeContext;
use yew::prelude::*;
use yew::LocalServerRenderer;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Part {
    Switcher,
    Backgrounds,
    Audio,
}

#[derive(Properties, PartialEq)]
struct HarnessProps {
    prefs: Preferences,
    part: Part,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let inner = match props.part {
        Part::Switcher => html! { <ThemeSwitcher /> },
        Part::Backgrounds => html! { <SeasonalBackgrounds /> },
        Part::Audio => html! { <AmbientAudio /> },
    };
    html! {
        <ContextProvider<ThemeContext> context={ThemeContext::fixed(props.prefs)}>
            { inner }
        </ContextProvider<ThemeContext>>
    }
}

fn render_with(prefs: Preferences, part: Part) -> String {
    block_on(LocalServerRenderer::<Harness>::with_props(HarnessProps { prefs, part }).render())
}

fn prefs(season: Season, audio_enabled: bool) -> Preferences {
    Preferences {
        season,
        audio_enabled,
        volume: 0.4,
    }
}

#[test]
fn app_renders_every_section_with_default_season() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains(r#"data-season="spring""#));
    for id in ["home", "about", "projects", "experience", "skills", "contact"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
    }
    assert!(html.contains(r#"id="main""#));
    assert!(html.contains("Download Resume"));
}

#[test]
fn switcher_shows_current_season_and_muted_audio() {
    let html = render_with(prefs(Season::Rainy, false), Part::Switcher);
    assert!(html.contains("Rainy"));
    assert!(html.contains(r#"title="Enable ambient""#));
    assert!(!html.contains("Ambient volume"));
    assert!(!html.contains("theme-switcher__menu"));
}

#[test]
fn switcher_shows_volume_slider_when_audio_enabled() {
    let html = render_with(prefs(Season::Summer, true), Part::Switcher);
    assert!(html.contains("Summer"));
    assert!(html.contains(r#"title="Mute ambient""#));
    assert!(html.contains(r#"title="Ambient volume""#));
    assert!(html.contains(r#"type="range""#));
}

#[test]
fn winter_backgrounds_render_snow_fire_and_aurora() {
    let html = render_with(prefs(Season::Winter, false), Part::Backgrounds);
    for class in ["fx-snow", "fx-fire", "fx-aurora"] {
        assert!(html.contains(class), "missing {class}");
    }
    assert!(!html.contains("fx-rain"));
    assert_eq!(html.matches(r#"class="fx-particle""#).count(), 60 + 2 + 2);
    assert_eq!(html.matches("slideshow__image").count(), 3);
}

#[test]
fn rainy_backgrounds_render_rain_and_lightning() {
    let html = render_with(prefs(Season::Rainy, false), Part::Backgrounds);
    assert!(html.contains("fx-rain"));
    assert!(html.contains("fx-lightning"));
    assert!(!html.contains("fx-snow"));
}

#[test]
fn audio_element_points_at_season_track() {
    let html = render_with(prefs(Season::Winter, true), Part::Audio);
    assert!(html.contains("<audio"));
    assert!(html.contains("/Music/winter.mp3"));

    let html = render_with(prefs(Season::Spring, false), Part::Audio);
    assert!(html.contains("/Music/Autumn.mp3"));
}

#[test]
fn sakura_layer_has_petals_and_mist() {
    let html = block_on(LocalServerRenderer::<SakuraBackground>::new().render());
    assert_eq!(html.matches("sakura__petal").count(), 40);
    assert_eq!(html.matches("sakura__mist").count(), 2);
}

#[test]
fn projects_start_in_loading_state() {
    let html = block_on(LocalServerRenderer::<Projects>::new().render());
    assert!(html.contains("Loading projects..."));
    assert!(!html.contains("project-card"));
}

#[test]
fn skills_render_orbit_for_every_category() {
    let html = block_on(LocalServerRenderer::<Skills>::new().render());
    assert_eq!(html.matches("orbit__bubble").count(), 4);
    assert_eq!(html.matches(r#"role="tab""#).count(), 4);
    assert!(html.contains(r#"aria-selected="true""#));
}

#[test]
fn contact_form_renders_fields_without_errors() {
    let html = block_on(LocalServerRenderer::<Contact>::new().render());
    for id in ["name", "email", "subject", "message"] {
        assert!(html.contains(&format!(r#"for="{id}""#)), "missing label for {id}");
    }
    assert!(html.contains("Send Message"));
    assert!(!html.contains("field-error"));
    assert!(!html.contains("confetti__piece"));
}

#[test]
fn navbar_links_every_section() {
    let html = block_on(LocalServerRenderer::<Navbar>::new().render());
    assert_eq!(html.matches(r#"class="nav-link "#).count(), 6);
    assert!(html.contains(r##"href="#contact""##));
    assert!(!html.contains("navbar--scrolled"));
    assert!(!html.contains(r#"id="mobile-menu""#));
}

#[test]
fn footer_shows_year_and_back_to_top() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains(&format!("© {FALLBACK_YEAR}")));
    assert!(html.contains("Back to top"));
}
