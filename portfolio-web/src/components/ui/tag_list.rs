use crate::components::ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct TagListProps {
    pub tags: Vec<String>,
    #[prop_or_default]
    pub class: f::Classes,
}

/// Row of technology badges.
#[f::function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> f::Html {
    let class = f::class_list(&["tag-list", "flex", "flex-wrap", "gap-2"], &props.class);
    f::html! {
        <ul class={class}>
            { for props.tags.iter().map(|tag| f::html! {
                <li class="px-3 py-1 text-xs font-medium rounded-full bg-gray-100 text-gray-700">
                    { tag.clone() }
                </li>
            }) }
        </ul>
    }
}
