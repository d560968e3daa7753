//! Marquee Web - Themeable video-player UI for Yew
//!
//! Wraps the browser's native `<video>` element in a root [`Video`]
//! component that derives UI state from media events and exposes playback
//! controls to a tree of child components. The browser does all decoding,
//! buffering and rendering; this crate is the control surface on top.
//!
//! # Example
//!
//! ```rust,ignore
//! use marquee_core::{PlayerConfig, Source};
//! use marquee_web::Video;
//! use yew::prelude::*;
//!
//! #[function_component(App)]
//! fn app() -> Html {
//!     let config = PlayerConfig {
//!         sources: vec![Source::with_type("/media/trailer.mp4", "video/mp4")],
//!         ..Default::default()
//!     };
//!     html! { <Video {config} /> }
//! }
//! ```
//!
//! Custom control trees receive the live player state and the control
//! delegate through [`PlayerContext`]; see [`use_player`].

pub mod context;
pub mod controls;
pub mod delegate;
pub mod fullscreen;
pub mod icon;
pub mod overlay;
pub mod progress_bar;
pub mod spinner;
pub mod throttle;
pub mod video;

pub use context::{use_player, PlayerContext};
pub use controls::{ControlProps, Controls, Fullscreen, Mute, PlayPause, Seek, Time, Volume};
pub use delegate::ControlDelegate;
pub use icon::Icon;
pub use overlay::Overlay;
pub use progress_bar::ProgressBar;
pub use spinner::Spinner;
pub use video::{Video, VideoProps};
