//! A player with a consumer-supplied control tree.
//!
//! Children of `Video` replace the default overlay and control bar; they
//! read live state and the control delegate through `use_player`.

use marquee_core::{PlayerConfig, Source};
use marquee_web::{use_player, Video};
use yew::prelude::*;

#[function_component(BigPlayButton)]
fn big_play_button() -> Html {
    let Some(player) = use_player() else {
        return Html::default();
    };
    let label = if player.state.paused { "Play" } else { "Pause" };
    let onclick = {
        let toggle_play = player.delegate.toggle_play.clone();
        Callback::from(move |_| toggle_play.emit(()))
    };
    html! {
        <button class="big-play" {onclick}>{ label }</button>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = PlayerConfig {
        sources: vec![Source::with_type("/media/trailer.mp4", "video/mp4")],
        ..Default::default()
    };
    html! {
        <Video {config}>
            <BigPlayButton />
        </Video>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
