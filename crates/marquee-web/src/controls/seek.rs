//! Seek bar: buffered-range indicator plus a draggable position gauge

use yew::prelude::*;

use super::ControlProps;
use crate::progress_bar::ProgressBar;

pub enum SeekMsg {
    /// Gauge input as a percentage of duration
    Input(f64),
    Focus,
    Blur,
}

/// Timeline control bound to `percentage_played`, with the buffered portion
/// rendered behind it
pub struct Seek {
    /// Focus on the gauge itself, independent of player-level focus
    focused: bool,
}

impl Component for Seek {
    type Message = SeekMsg;
    type Properties = ControlProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { focused: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SeekMsg::Input(percent) => {
                let player = &ctx.props().player;
                // Forced so dragging reflects immediately instead of waiting
                // for the throttled seeked/seeking events
                let time = seek_target(percent, player.state.duration);
                player.delegate.seek.emit((time, true));
                false
            }
            SeekMsg::Focus => {
                self.focused = true;
                true
            }
            SeekMsg::Blur => {
                self.focused = false;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let new = &ctx.props().player;
        let old = &old_props.player;
        new.delegate.seek != old.delegate.seek
            || new.state.percentage_buffered != old.state.percentage_buffered
            || new.state.percentage_played != old.state.percentage_played
            || new.state.duration != old.state.duration
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let player = &ctx.props().player;
        let class = classes!(
            "video-seek",
            "video__control",
            self.focused.then_some("video__control--focused"),
        );
        html! {
            <div {class} aria-label={player.labels.seek.to_string()}>
                <div class="video-seek__container">
                    <div
                        class="video-seek__buffer-bar"
                        style={format!("width: {}%", player.state.percentage_buffered)}
                    ></div>
                    <ProgressBar
                        progress={player.state.percentage_played}
                        label={player.labels.seek.to_string()}
                        onchange={ctx.link().callback(SeekMsg::Input)}
                        onfocus={ctx.link().callback(|_| SeekMsg::Focus)}
                        onblur={ctx.link().callback(|_| SeekMsg::Blur)}
                    />
                </div>
            </div>
        }
    }
}

/// Map a gauge percentage to a media timestamp
fn seek_target(percent: f64, duration: f64) -> f64 {
    percent * duration / 100.0
}
