//! Fullscreen button
//!
//! Cares about nothing but the delegate identity: playback state churn
//! never re-renders it.

use yew::prelude::*;

use super::ControlProps;
use crate::icon::Icon;

pub struct Fullscreen;

impl Component for Fullscreen {
    type Message = ();
    type Properties = ControlProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props().player.delegate.fullscreen != old_props.player.delegate.fullscreen
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let player = &ctx.props().player;
        let onclick = {
            let fullscreen = player.delegate.fullscreen.clone();
            Callback::from(move |_: MouseEvent| fullscreen.emit(()))
        };
        html! {
            <button
                class="video-fullscreen video__control"
                aria-label={player.labels.fullscreen.to_string()}
                {onclick}
            >
                <Icon name="resize-full" />
            </button>
        }
    }
}
