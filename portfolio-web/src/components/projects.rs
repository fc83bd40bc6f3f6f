use crate::components::ui::foundation as f;
use crate::components::ui::{SectionHeader, TagList};
use crate::hooks::use_timeout_when;
use crate::theme::use_theme;
use portfolio_core::{PROJECT_FILTERS, PortfolioContent, Project, ProjectFilter, Section};

/// Length of the simulated fetch before the grid appears.
pub const PROJECTS_LOADING_MS: u32 = 1_000;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[f::function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> f::Html {
    let project = &props.project;
    f::html! {
        <article class="project-card group rounded-2xl bg-white/80 shadow-lg overflow-hidden">
            <div class="relative h-48 overflow-hidden">
                <img
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    src={project.image.clone()}
                    alt={project.name.clone()}
                    loading="lazy"
                />
                <span class="absolute top-3 right-3 px-3 py-1 text-xs rounded-full bg-white/90">
                    { project.category.label() }
                </span>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{ project.name.clone() }</h3>
                <p class="text-gray-600 mb-4">{ project.description.clone() }</p>
                <TagList tags={project.tech_stack.clone()} class={f::classes!("mb-4")} />
                <div class="flex gap-4 text-sm font-semibold">
                    <a href={project.github.clone()} target="_blank" rel="noopener noreferrer">{ "GitHub" }</a>
                    <a href={project.live.clone()} target="_blank" rel="noopener noreferrer">{ "Live Demo" }</a>
                </div>
            </div>
        </article>
    }
}

#[f::function_component(Projects)]
pub fn projects() -> f::Html {
    let content = PortfolioContent::bundled();
    let palette = use_theme().palette();
    let loading = f::use_state(|| true);
    let filter = f::use_state(ProjectFilter::default);

    {
        let loading = loading.clone();
        use_timeout_when(
            *loading,
            PROJECTS_LOADING_MS,
            f::Callback::from(move |()| loading.set(false)),
        );
    }

    let buttons = PROJECT_FILTERS.iter().map(|&option| {
        let onclick = {
            let filter = filter.clone();
            f::Callback::from(move |_: f::MouseEvent| filter.set(option))
        };
        let active = option == *filter;
        let class = f::classes!(
            "filter-button",
            "px-5",
            "py-2",
            "rounded-full",
            "font-medium",
            "transition-colors",
            if active {
                f::classes!("text-white", palette.accent_classes())
            } else {
                f::classes!("bg-white/80", "text-gray-700")
            }
        );
        f::html! {
            <button
                key={option.label()}
                type="button"
                class={class}
                aria-pressed={active.to_string()}
                onclick={onclick}
            >
                { option.label() }
            </button>
        }
    });

    f::html! {
        <section id={Section::Projects.anchor()} class="projects py-24 px-6">
            <div class="container mx-auto">
                <SectionHeader title="Featured Projects" subtitle="A selection of things I have built" />
                if *loading {
                    <div class="projects__loading flex flex-col items-center gap-4 py-16" role="status">
                        <span class="w-12 h-12 rounded-full border-4 border-gray-200 border-t-current animate-spin"></span>
                        <p class="text-gray-600">{ "Loading projects..." }</p>
                    </div>
                } else {
                    <div class="flex flex-wrap justify-center gap-3 mb-12" role="group" aria-label="Filter projects">
                        { for buttons }
                    </div>
                    <div class="projects__grid grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        { for content.projects_in(*filter).map(|project| f::html! {
                            <ProjectCard key={project.name.clone()} project={project.clone()} />
                        }) }
                    </div>
                }
            </div>
        </section>
    }
}
