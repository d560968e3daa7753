//! Glyph rendering

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Glyph name, mapped to a `video-icon--{name}` class for the stylesheet
    pub name: AttrValue,
}

/// Stateless glyph leaf
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let class = classes!("video-icon", format!("video-icon--{}", props.name));
    html! {
        <span {class} aria-hidden="true"></span>
    }
}
