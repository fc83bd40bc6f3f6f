use crate::components::ui::foundation as f;
use crate::components::ui::{SectionHeader, TagList};
use crate::theme::use_theme;
use portfolio_core::{Experience, PortfolioContent, Section};

#[derive(f::Properties, PartialEq, Clone)]
struct EntryProps {
    entry: Experience,
    accent: String,
}

#[f::function_component(TimelineEntry)]
fn timeline_entry(props: &EntryProps) -> f::Html {
    let entry = &props.entry;
    let marker = f::classes!(
        "timeline__marker",
        "absolute",
        "-left-3",
        "top-2",
        "w-6",
        "h-6",
        "rounded-full",
        "border-4",
        "border-white",
        props.accent.clone()
    );
    f::html! {
        <li class="timeline__entry relative pl-10 pb-12">
            <span class={marker} aria-hidden="true"></span>
            <article class="rounded-2xl bg-white/80 p-6 shadow-lg">
                <header class="flex flex-wrap justify-between gap-2 mb-4">
                    <div>
                        <h3 class="text-xl font-bold">{ entry.position.clone() }</h3>
                        <p class="font-semibold text-gray-700">{ entry.company.clone() }</p>
                    </div>
                    <div class="text-sm text-gray-500 text-right">
                        <p>{ entry.duration.clone() }</p>
                        <p>{ entry.location.clone() }</p>
                    </div>
                </header>
                <p class="text-gray-600 mb-4">{ entry.description.clone() }</p>
                <ul class="achievements list-disc pl-5 space-y-1 mb-4 text-gray-700">
                    { for entry.achievements.iter().map(|a| f::html! { <li>{ a.clone() }</li> }) }
                </ul>
                <TagList tags={entry.technologies.clone()} />
            </article>
        </li>
    }
}

#[f::function_component(ExperienceSection)]
pub fn experience_section() -> f::Html {
    let content = PortfolioContent::bundled();
    let accent = use_theme().palette().accent_classes();
    f::html! {
        <section id={Section::Experience.anchor()} class="experience py-24 px-6">
            <div class="container mx-auto max-w-4xl">
                <SectionHeader title="Experience" subtitle="Where I have been building" />
                <ol class="timeline relative border-l-2 border-gray-200 ml-3">
                    { for content.experience.iter().map(|entry| f::html! {
                        <TimelineEntry
                            key={format!("{}-{}", entry.company, entry.duration)}
                            entry={entry.clone()}
                            accent={accent.clone()}
                        />
                    }) }
                </ol>
            </div>
        </section>
    }
}
