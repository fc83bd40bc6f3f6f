use crate::components::ui::foundation as f;
use crate::components::ui::{SectionHeader, SkillBar};
use portfolio_core::{PortfolioContent, Section};

#[f::function_component(About)]
pub fn about() -> f::Html {
    let content = PortfolioContent::bundled();
    let about = &content.about;

    f::html! {
        <section id={Section::About.anchor()} class="about py-24 px-6">
            <div class="container mx-auto">
                <SectionHeader title="About Me" subtitle={content.profile.summary.clone()} />
                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        { for about.cards.iter().map(|card| {
                            let badge = f::classes!("w-12", "h-1", "rounded-full", "mb-4", "bg-gradient-to-r", card.gradient.clone());
                            f::html! {
                                <article key={card.title.clone()} class="info-card rounded-2xl bg-white/80 p-6 shadow-lg">
                                    <div class={badge}></div>
                                    <h3 class="text-xl font-bold mb-2">{ card.title.clone() }</h3>
                                    <p class="text-gray-600">{ card.body.clone() }</p>
                                </article>
                            }
                        }) }
                    </div>
                    <div class="rounded-2xl bg-white/80 p-6 shadow-lg">
                        <h3 class="text-xl font-bold mb-6">{ "Core Skills" }</h3>
                        { for about.skills.iter().map(|skill| f::html! {
                            <SkillBar key={skill.name.clone()} skill={skill.clone()} />
                        }) }
                        <h3 class="text-xl font-bold mt-8 mb-4">{ "What I Bring" }</h3>
                        <ul class="highlights space-y-3">
                            { for about.highlights.iter().map(|item| {
                                let dot = f::classes!("inline-block", "w-2", "h-2", "rounded-full", "mr-3", item.dot.clone());
                                f::html! {
                                    <li key={item.text.clone()} class="flex items-center text-gray-700">
                                        <span class={dot} aria-hidden="true"></span>
                                        { item.text.clone() }
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
