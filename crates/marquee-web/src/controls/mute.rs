//! Mute toggle button

use yew::prelude::*;

use super::ControlProps;
use crate::icon::Icon;

pub struct Mute;

impl Component for Mute {
    type Message = ();
    type Properties = ControlProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let new = &ctx.props().player;
        let old = &old_props.player;
        new.state.muted != old.state.muted || new.delegate.toggle_mute != old.delegate.toggle_mute
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let player = &ctx.props().player;
        let label = if player.state.muted {
            player.labels.unmute.to_string()
        } else {
            player.labels.mute.to_string()
        };
        let icon = if player.state.muted {
            "volume-off"
        } else {
            "volume-up"
        };
        let onclick = {
            let toggle_mute = player.delegate.toggle_mute.clone();
            Callback::from(move |_: MouseEvent| toggle_mute.emit(()))
        };
        html! {
            <button class="video-mute video__control" aria-label={label} {onclick}>
                <Icon name={icon} />
            </button>
        }
    }
}
