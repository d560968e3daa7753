//! Built-in playback controls
//!
//! Every control receives the full [`PlayerContext`] for extensibility but
//! implements a `changed()` gate over the few fields it actually renders,
//! so irrelevant state churn (a `timeupdate` tick, say) does not re-render
//! the whole bar.

mod fullscreen;
mod mute;
mod play_pause;
mod seek;
mod time;
mod volume;

pub use fullscreen::Fullscreen;
pub use mute::Mute;
pub use play_pause::PlayPause;
pub use seek::Seek;
pub use time::Time;
pub use volume::Volume;

use yew::prelude::*;

use crate::context::PlayerContext;

/// Shared props for control components: the whole bundle, gated per control
#[derive(Properties, PartialEq, Clone)]
pub struct ControlProps {
    pub player: PlayerContext,
}

/// The default control bar layout
#[function_component(Controls)]
pub fn controls(props: &ControlProps) -> Html {
    let player = props.player.clone();
    html! {
        <div class="video-controls video__controls">
            <PlayPause player={player.clone()} />
            <Seek player={player.clone()} />
            <Time player={player.clone()} />
            <Mute player={player.clone()} />
            <Volume player={player.clone()} />
            <Fullscreen player={player} />
        </div>
    }
}
