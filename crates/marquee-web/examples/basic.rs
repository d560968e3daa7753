use gloo_console::log;
use marquee_core::{MediaEventKind, PlayerConfig, Source};
use marquee_web::Video;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let on_media_event = Callback::from(|kind: MediaEventKind| {
        log!("media event:", kind.as_name());
    });

    let config = PlayerConfig {
        sources: vec![
            Source::with_type("/media/trailer.webm", "video/webm"),
            Source::with_type("/media/trailer.mp4", "video/mp4"),
        ],
        ..Default::default()
    };

    html! {
        <div>
            <style>{ marquee_core::Theme::default().to_css() }</style>
            <Video {config} {on_media_event} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
