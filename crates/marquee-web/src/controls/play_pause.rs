//! Play/pause toggle button

use yew::prelude::*;

use super::ControlProps;
use crate::icon::Icon;

pub struct PlayPause;

impl Component for PlayPause {
    type Message = ();
    type Properties = ControlProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let new = &ctx.props().player;
        let old = &old_props.player;
        new.state.paused != old.state.paused || new.delegate.toggle_play != old.delegate.toggle_play
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let player = &ctx.props().player;
        let label = if player.state.paused {
            player.labels.play.to_string()
        } else {
            player.labels.pause.to_string()
        };
        let icon = if player.state.paused { "play" } else { "pause" };
        let onclick = {
            let toggle_play = player.delegate.toggle_play.clone();
            Callback::from(move |_: MouseEvent| toggle_play.emit(()))
        };
        html! {
            <button class="video-play video__control" aria-label={label} {onclick}>
                <Icon name={icon} />
            </button>
        }
    }
}
