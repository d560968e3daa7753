//! Draggable horizontal gauge
//!
//! A thin wrapper over `<input type="range">` in `0..=100` percent space.
//! Purely presentational: the owner interprets the percentage (seek target,
//! volume level) and drives the media element.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Filled portion, `0..=100`
    pub progress: f64,
    /// Fired with the new percentage while dragging or clicking
    pub onchange: Callback<f64>,
    #[prop_or_default]
    pub onfocus: Callback<()>,
    #[prop_or_default]
    pub onblur: Callback<()>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_unchecked_into::<HtmlInputElement>()
                .value_as_number();
            if value.is_finite() {
                onchange.emit(value);
            }
        })
    };
    let onfocus = {
        let onfocus = props.onfocus.clone();
        Callback::from(move |_: FocusEvent| onfocus.emit(()))
    };
    let onblur = {
        let onblur = props.onblur.clone();
        Callback::from(move |_: FocusEvent| onblur.emit(()))
    };

    html! {
        <input
            type="range"
            class="video-progress-bar"
            min="0"
            max="100"
            step="any"
            value={props.progress.to_string()}
            aria-label={props.label.clone()}
            {oninput}
            {onfocus}
            {onblur}
        />
    }
}
