//! Loading animation

use yew::prelude::*;

/// Stateless loading-spinner leaf
#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="video-spinner" aria-hidden="true">
            <div class="video-spinner__circle"></div>
        </div>
    }
}
