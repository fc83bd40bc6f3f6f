use crate::components::about::About;
use crate::components::backgrounds::{AmbientAudio, SakuraBackground, SeasonalBackgrounds};
use crate::components::contact::Contact;
use crate::components::experience::ExperienceSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::theme::{ThemeContext, use_theme_provider};
use yew::prelude::*;

/// Page root: provides the theme and lays out every section in order.
#[function_component(App)]
pub fn app() -> Html {
    let theme = use_theme_provider();
    html! {
        <ContextProvider<ThemeContext> context={theme}>
            <Page />
        </ContextProvider<ThemeContext>>
    }
}

#[function_component(Page)]
fn page() -> Html {
    let theme = crate::theme::use_theme();
    let season = theme.season();
    let class = classes!(
        "relative",
        "min-h-screen",
        "overflow-x-hidden",
        theme.palette().backdrop_classes()
    );
    html! {
        <div class={class} data-season={season.as_str()}>
            <SakuraBackground />
            <SeasonalBackgrounds />
            <AmbientAudio />
            <Navbar />
            <main id="main" class="relative z-10">
                <Hero />
                <About />
                <Projects />
                <ExperienceSection />
                <Skills />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
