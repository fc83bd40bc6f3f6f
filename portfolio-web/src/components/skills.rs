use crate::components::ui::foundation as f;
use crate::components::ui::{SectionHeader, SkillBar};
use crate::theme::use_theme;
use portfolio_core::layout::ORBIT_RADIUS_PX;
use portfolio_core::{PortfolioContent, Section, orbit_offset};

fn orbit_style(index: usize, count: usize) -> String {
    let (x, y) = orbit_offset(index, count, ORBIT_RADIUS_PX);
    format!("transform:translate(calc(-50% + {x:.1}px), calc(-50% + {y:.1}px))")
}

#[f::function_component(Skills)]
pub fn skills() -> f::Html {
    let content = PortfolioContent::bundled();
    let palette = use_theme().palette();
    let active = f::use_state(|| {
        content
            .skills
            .first()
            .map(|category| category.key.clone())
            .unwrap_or_default()
    });

    let select = |key: &str| {
        let active = active.clone();
        let key = key.to_owned();
        f::Callback::from(move |_: f::MouseEvent| active.set(key.clone()))
    };

    let count = content.skills.len();
    let current = content.skill_category(&active);

    let tabs = content.skills.iter().map(|category| {
        let selected = category.key == *active;
        let class = f::classes!(
            "skill-tab",
            "px-5",
            "py-2",
            "rounded-full",
            "font-medium",
            if selected {
                f::classes!("text-white", palette.accent_classes())
            } else {
                f::classes!("bg-white/80", "text-gray-700")
            }
        );
        f::html! {
            <button
                key={category.key.clone()}
                type="button"
                role="tab"
                class={class}
                aria-selected={selected.to_string()}
                onclick={select(&category.key)}
            >
                { category.title.clone() }
            </button>
        }
    });

    let bubbles = content.skills.iter().enumerate().map(|(index, category)| {
        let selected = category.key == *active;
        let class = f::classes!(
            "orbit__bubble",
            "absolute",
            "left-1/2",
            "top-1/2",
            "w-20",
            "h-20",
            "rounded-full",
            "flex",
            "items-center",
            "justify-center",
            "text-xs",
            "font-semibold",
            "shadow-lg",
            "transition-transform",
            if selected {
                f::classes!("text-white", "scale-110", palette.accent_classes())
            } else {
                f::classes!("bg-white/90", "text-gray-700")
            }
        );
        f::html! {
            <button
                key={category.key.clone()}
                type="button"
                class={class}
                style={orbit_style(index, count)}
                aria-label={category.title.clone()}
                onclick={select(&category.key)}
            >
                { category.short_title().to_owned() }
            </button>
        }
    });

    let hub_class = f::classes!(
        "orbit__hub",
        "absolute",
        "left-1/2",
        "top-1/2",
        "-translate-x-1/2",
        "-translate-y-1/2",
        "w-24",
        "h-24",
        "rounded-full",
        "flex",
        "items-center",
        "justify-center",
        "text-white",
        "font-bold",
        palette.accent_classes()
    );

    f::html! {
        <section id={Section::Skills.anchor()} class="skills py-24 px-6">
            <div class="container mx-auto">
                <SectionHeader title="Skills & Expertise" subtitle="Tools and technologies I work with" />
                <div class="flex flex-wrap justify-center gap-3 mb-12" role="tablist">
                    { for tabs }
                </div>
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="rounded-2xl bg-white/80 p-8 shadow-lg" role="tabpanel">
                        if let Some(category) = current {
                            <h3 class="text-2xl font-bold mb-2">{ category.title.clone() }</h3>
                            <p class="text-gray-600 mb-6">{ category.description.clone() }</p>
                            { for category.skills.iter().map(|skill| f::html! {
                                <SkillBar key={skill.name.clone()} skill={skill.clone()} />
                            }) }
                        }
                    </div>
                    <div class="orbit relative mx-auto w-80 h-80" aria-label="Skill categories">
                        <div class={hub_class}>{ "Skills" }</div>
                        { for bubbles }
                    </div>
                </div>
            </div>
        </section>
    }
}
