//! The root player component
//!
//! Owns the native media element reference, the canonical derived state,
//! the media event listeners and the control delegate. Descendant controls
//! never touch the element; every operation routes through here.

use std::rc::Rc;

use gloo_console as console;
use gloo_events::EventListener;
use marquee_core::{
    Error, Labels, MediaEventKind, MediaSnapshot, NetworkState, PlaybackPhase, PlayerConfig,
    PlayerState, ReadyState, Source,
};
use web_sys::{HtmlVideoElement, TimeRanges};
use yew::prelude::*;

use crate::context::PlayerContext;
use crate::controls::Controls;
use crate::delegate::ControlDelegate;
use crate::fullscreen;
use crate::overlay::Overlay;
use crate::throttle::ResyncThrottle;

#[derive(Properties, PartialEq)]
pub struct VideoProps {
    /// Playback configuration bundle: autoplay, muted, sources, label
    /// overrides, the controls flag and the throttle window
    #[prop_or_default]
    pub config: PlayerConfig,
    /// Loop back to the start on ended
    #[prop_or_default]
    pub looping: bool,
    /// Hint mobile engines to play inline rather than fullscreen
    #[prop_or_default]
    pub playsinline: bool,
    /// Extra class on the player shell
    #[prop_or_default]
    pub class: Option<AttrValue>,
    /// Inline style on the player shell
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Passthrough `poster` attribute
    #[prop_or_default]
    pub poster: Option<AttrValue>,
    /// Passthrough `preload` attribute
    #[prop_or_default]
    pub preload: Option<AttrValue>,
    /// Passthrough `crossorigin` attribute
    #[prop_or_default]
    pub crossorigin: Option<AttrValue>,
    /// Fired for every native media event, before the internal
    /// resynchronization it triggers
    #[prop_or_default]
    pub on_media_event: Option<Callback<MediaEventKind>>,
    /// Custom control tree; when empty the default Overlay + Controls
    /// render instead. Children read the player through [`PlayerContext`].
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    /// A native media event fired
    Native(MediaEventKind),
    /// Re-derive state from the element's live properties
    Resync,
    Play,
    Pause,
    TogglePlay,
    Mute,
    Unmute,
    ToggleMute,
    /// `(time_seconds, force)`
    Seek(f64, bool),
    /// `(volume 0.0..=1.0, force)`
    SetVolume(f64, bool),
    SetPlaybackRate(f64),
    Fullscreen,
    Load,
    Focus,
    Blur,
}

/// Root player wrapping the native `<video>` element
pub struct Video {
    video_ref: NodeRef,
    state: PlayerState,
    labels: Rc<Labels>,
    delegate: ControlDelegate,
    throttle: ResyncThrottle,
    /// One listener per media event kind plus the non-bubbling error
    /// listener on the last source; dropped (and thereby removed) with us
    listeners: Vec<EventListener>,
}

impl Component for Video {
    type Message = Msg;
    type Properties = VideoProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let link = ctx.link();
        // Built once; controls compare these identities to gate re-renders
        let delegate = ControlDelegate {
            toggle_play: link.callback(|_| Msg::TogglePlay),
            toggle_mute: link.callback(|_| Msg::ToggleMute),
            play: link.callback(|_| Msg::Play),
            pause: link.callback(|_| Msg::Pause),
            mute: link.callback(|_| Msg::Mute),
            unmute: link.callback(|_| Msg::Unmute),
            seek: link.callback(|(time, force)| Msg::Seek(time, force)),
            set_volume: link.callback(|(volume, force)| Msg::SetVolume(volume, force)),
            set_playback_rate: link.callback(Msg::SetPlaybackRate),
            fullscreen: link.callback(|_| Msg::Fullscreen),
            load: link.callback(|_| Msg::Load),
        };
        Self {
            video_ref: NodeRef::default(),
            state: PlayerState::initial(props.config.autoplay, props.config.muted),
            labels: Rc::new(Labels::resolve(&props.config.labels)),
            delegate,
            throttle: ResyncThrottle::new(
                props.config.throttle_ms,
                link.callback(|_| Msg::Resync),
            ),
            listeners: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Native(kind) => {
                // Consumer handler runs before the (deferred) resync
                if let Some(handler) = &ctx.props().on_media_event {
                    handler.emit(kind);
                }
                self.throttle.schedule();
                false
            }
            Msg::Resync => self.resync(),
            Msg::Play => {
                self.native_play();
                false
            }
            Msg::Pause => {
                self.native_pause();
                false
            }
            Msg::TogglePlay => {
                // Judged on last-known derived state, not a fresh read
                if self.state.paused {
                    self.native_play();
                } else {
                    self.native_pause();
                }
                false
            }
            Msg::Mute => {
                self.set_muted(true);
                false
            }
            Msg::Unmute => {
                self.set_muted(false);
                false
            }
            Msg::ToggleMute => {
                self.set_muted(!self.state.muted);
                false
            }
            Msg::Seek(time, force) => {
                if let Some(el) = self.media() {
                    el.set_current_time(time);
                    if force {
                        self.throttle.flush();
                    }
                }
                false
            }
            Msg::SetVolume(volume, force) => {
                if let Some(el) = self.media() {
                    el.set_volume(volume);
                    if force {
                        self.throttle.flush();
                    }
                }
                false
            }
            Msg::SetPlaybackRate(rate) => {
                if let Some(el) = self.media() {
                    el.set_playback_rate(rate);
                    // No ratechange event is guaranteed everywhere
                    self.throttle.flush();
                }
                false
            }
            Msg::Fullscreen => {
                if let Some(el) = self.media() {
                    if let Err(err) = fullscreen::request(&el) {
                        console::debug!(err.to_string());
                    }
                }
                false
            }
            Msg::Load => {
                if let Some(el) = self.media() {
                    el.load();
                }
                false
            }
            Msg::Focus => {
                self.state.focused = true;
                true
            }
            Msg::Blur => {
                self.state.focused = false;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.config.labels != old_props.config.labels {
            self.labels = Rc::new(Labels::resolve(&props.config.labels));
        }
        // Only re-assert element configuration when the configuration
        // itself changed. The muted/autoplay flags are construction-time
        // inputs; once the user drives playback through the delegate, an
        // unrelated prop change must not push them back onto the element.
        if element_config_changed(props, old_props) {
            if let Some(el) = self.media() {
                configure_element(&el, props);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let class = shell_class(
            self.state.phase(),
            self.state.focused,
            props.class.as_deref(),
        );
        let player = PlayerContext {
            state: self.state.clone(),
            delegate: self.delegate.clone(),
            labels: Rc::clone(&self.labels),
        };
        html! {
            <div
                class={class}
                tabindex="0"
                style={props.style.clone()}
                onfocus={ctx.link().callback(|_: FocusEvent| Msg::Focus)}
                onblur={ctx.link().callback(|_: FocusEvent| Msg::Blur)}
            >
                <video
                    ref={self.video_ref.clone()}
                    class="video__el"
                    poster={props.poster.clone()}
                    preload={props.preload.clone()}
                    crossorigin={props.crossorigin.clone()}
                >
                    { for props.config.sources.iter().map(render_source) }
                </video>
                if props.config.controls {
                    <ContextProvider<PlayerContext> context={player.clone()}>
                        if props.children.is_empty() {
                            <>
                                <Overlay player={player.clone()} />
                                <Controls player={player} />
                            </>
                        } else {
                            { for props.children.iter() }
                        }
                    </ContextProvider<PlayerContext>>
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(el) = self.media() else {
            console::error!(Error::NotMounted.to_string());
            return;
        };
        configure_element(&el, ctx.props());

        for kind in MediaEventKind::ALL {
            let link = ctx.link().clone();
            self.listeners.push(EventListener::new(
                el.as_ref(),
                kind.as_name(),
                move |_| link.send_message(Msg::Native(kind)),
            ));
        }
        // The error event of a failing <source> does not bubble, so listen
        // on the last candidate directly: it failing means nothing played
        if let Some(last_source) = el.last_element_child() {
            let link = ctx.link().clone();
            self.listeners.push(EventListener::new(
                last_source.as_ref(),
                "error",
                move |_| link.send_message(Msg::Native(MediaEventKind::Error)),
            ));
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // A pending trailing resync must never land on a destroyed player
        self.throttle.cancel();
        self.listeners.clear();
    }
}

impl Video {
    fn media(&self) -> Option<HtmlVideoElement> {
        self.video_ref.cast::<HtmlVideoElement>()
    }

    /// Re-read the element and apply the derivation; re-render only when
    /// the derived state actually changed
    fn resync(&mut self) -> bool {
        let Some(el) = self.media() else {
            return false;
        };
        let snapshot = snapshot(&el);
        let mut next = self.state.clone();
        next.apply_snapshot(&snapshot);
        if next == self.state {
            false
        } else {
            self.state = next;
            true
        }
    }

    fn native_play(&self) {
        if let Some(el) = self.media() {
            // State catches up via the native play/playing events
            if let Err(err) = el.play() {
                let err = Error::Playback(format!("{err:?}"));
                console::warn!(err.to_string());
            }
        }
    }

    fn native_pause(&self) {
        if let Some(el) = self.media() {
            if let Err(err) = el.pause() {
                let err = Error::Playback(format!("{err:?}"));
                console::warn!(err.to_string());
            }
        }
    }

    fn set_muted(&self, muted: bool) {
        if let Some(el) = self.media() {
            el.set_muted(muted);
        }
    }
}

/// True when a prop that `configure_element` writes to the element differs
fn element_config_changed(new: &VideoProps, old: &VideoProps) -> bool {
    new.config.autoplay != old.config.autoplay
        || new.config.muted != old.config.muted
        || new.looping != old.looping
        || new.playsinline != old.playsinline
}

/// Push configuration onto the element. Only genuine media configuration
/// goes here; derived state never reaches the DOM as attributes.
fn configure_element(el: &HtmlVideoElement, props: &VideoProps) {
    el.set_autoplay(props.config.autoplay);
    el.set_default_muted(props.config.muted);
    el.set_muted(props.config.muted);
    el.set_loop(props.looping);
    if props.playsinline {
        let _ = el.set_attribute("playsinline", "");
    } else {
        let _ = el.remove_attribute("playsinline");
    }
}

fn render_source(source: &Source) -> Html {
    html! {
        <source src={source.src.clone()} type={source.media_type.clone()} />
    }
}

fn snapshot(el: &HtmlVideoElement) -> MediaSnapshot {
    MediaSnapshot {
        duration: el.duration(),
        current_time: el.current_time(),
        buffered: buffered_ranges(&el.buffered()),
        paused: el.paused(),
        muted: el.muted(),
        volume: el.volume(),
        playback_rate: el.playback_rate(),
        ready_state: ReadyState::from_raw(el.ready_state()),
        network_state: NetworkState::from_raw(el.network_state()),
    }
}

fn buffered_ranges(ranges: &TimeRanges) -> marquee_core::BufferedRanges {
    let mut pairs = Vec::with_capacity(ranges.length() as usize);
    for index in 0..ranges.length() {
        if let (Ok(start), Ok(end)) = (ranges.start(index), ranges.end(index)) {
            pairs.push((start, end));
        }
    }
    pairs.into()
}

/// Shell class string: base, phase modifier, focus modifier, user class
fn shell_class(phase: PlaybackPhase, focused: bool, custom: Option<&str>) -> String {
    let mut class = format!("video {}", phase.modifier_class());
    if focused {
        class.push_str(" video--focused");
    }
    if let Some(custom) = custom {
        class.push(' ');
        class.push_str(custom);
    }
    class
}
