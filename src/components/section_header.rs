use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Small caption, heading and accent rule shared by every section.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <p class="eyebrow">{&props.eyebrow}</p>
            <h2>{&props.title}</h2>
            <div class="accent-rule"></div>
            { for props.children.iter() }
        </div>
    }
}
