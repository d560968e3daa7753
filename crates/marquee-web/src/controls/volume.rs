//! Volume gauge

use yew::prelude::*;

use super::ControlProps;
use crate::progress_bar::ProgressBar;

pub struct Volume;

impl Component for Volume {
    type Message = f64;
    type Properties = ControlProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, percent: Self::Message) -> bool {
        // Forced for the same reason as seek: volume drags should not lag
        ctx.props()
            .player
            .delegate
            .set_volume
            .emit((percent / 100.0, true));
        false
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let new = &ctx.props().player;
        let old = &old_props.player;
        new.state.volume != old.state.volume || new.delegate.set_volume != old.delegate.set_volume
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let player = &ctx.props().player;
        html! {
            <div class="video-volume video__control" aria-label={player.labels.volume.to_string()}>
                <ProgressBar
                    progress={player.state.volume * 100.0}
                    label={player.labels.volume.to_string()}
                    onchange={ctx.link().callback(|percent| percent)}
                />
            </div>
        }
    }
}
