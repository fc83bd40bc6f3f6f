use crate::components::ui::foundation as f;
use crate::theme::use_theme;

#[derive(f::Properties, PartialEq, Clone)]
pub struct SectionHeaderProps {
    pub title: f::AttrValue,
    #[prop_or_default]
    pub subtitle: Option<f::AttrValue>,
}

/// Centered section title with the season's accent underline.
#[f::function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> f::Html {
    let palette = use_theme().palette();
    let title_class = f::classes!(
        "text-4xl",
        "md:text-5xl",
        "font-bold",
        "mb-4",
        f::gradient_text(palette)
    );
    let rule_class = f::classes!("w-24", "h-1", "mx-auto", "rounded-full", palette.accent_classes());
    f::html! {
        <div class="section-header text-center mb-16">
            <h2 class={title_class}>{ props.title.clone() }</h2>
            <div class={rule_class}></div>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="mt-6 text-lg text-gray-600 max-w-2xl mx-auto">{ subtitle }</p>
            }
        </div>
    }
}
