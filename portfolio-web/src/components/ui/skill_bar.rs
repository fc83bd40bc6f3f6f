use crate::components::ui::foundation as f;
use portfolio_core::Skill;

#[derive(f::Properties, PartialEq, Clone)]
pub struct SkillBarProps {
    pub skill: Skill,
}

#[f::function_component(SkillBar)]
pub fn skill_bar(props: &SkillBarProps) -> f::Html {
    let skill = &props.skill;
    let fill_class = f::classes!(
        "skill-bar__fill",
        "h-2",
        "rounded-full",
        "bg-gradient-to-r",
        skill.color.clone()
    );
    f::html! {
        <div class="skill-bar mb-4">
            <div class="flex justify-between mb-1 text-sm font-medium">
                <span>{ skill.name.clone() }</span>
                <span>{ format!("{}%", skill.level) }</span>
            </div>
            <div
                class="h-2 w-full rounded-full bg-gray-200"
                role="progressbar"
                aria-label={skill.name.clone()}
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={skill.level.to_string()}
            >
                <div class={fill_class} style={f::width_style(f64::from(skill.level))}></div>
            </div>
        </div>
    }
}
