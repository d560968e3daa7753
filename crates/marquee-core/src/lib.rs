//! Marquee Core - Playback-state logic for the Marquee video player
//!
//! This crate holds everything about the player that does not need a DOM:
//! - Media element constants and the fixed media event table
//! - Derived player state and its derivation routine
//! - The throttle gate coalescing state resynchronization
//! - Label/localization mapping with overrides
//! - Player configuration types
//! - Theme and CSS custom-property generation
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Marquee Core                         │
//! ├──────────────────────────────────────────────────────────┤
//! │                                                          │
//! │  ┌────────────┐   ┌─────────────┐   ┌────────────┐       │
//! │  │   Media    │   │   Player    │   │  Throttle  │       │
//! │  │  Snapshot  ├──▶│    State    │   │    Gate    │       │
//! │  └────────────┘   └──────┬──────┘   └────────────┘       │
//! │                          │                               │
//! │  ┌────────────┐   ┌──────┴──────┐   ┌────────────┐       │
//! │  │   Labels   │   │   Config    │   │   Theme    │       │
//! │  └────────────┘   └─────────────┘   └────────────┘       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The companion crate `marquee-web` wires these pieces to the browser's
//! native `<video>` element and renders the control tree.

pub mod config;
pub mod error;
pub mod labels;
pub mod media;
pub mod state;
pub mod theme;
pub mod throttle;

pub use config::{PlayerConfig, Source};
pub use error::{Error, Result};
pub use labels::{LabelOverrides, Labels};
pub use media::{BufferedRanges, MediaEventKind, MediaSnapshot, NetworkState, ReadyState};
pub use state::{PlaybackPhase, PlayerState};
pub use theme::{Theme, ThemeColors};
pub use throttle::{ThrottleDecision, ThrottleGate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the player library with default configuration
pub fn init() {
    tracing::info!(version = VERSION, "Marquee Core initialized");
}
