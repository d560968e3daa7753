//! Derived player state
//!
//! The UI never treats its own state as a source of truth: every field here
//! except `focused` is a cache of the native element's live properties,
//! refreshed by [`PlayerState::apply_snapshot`]. Mutating this state does not
//! change the video; the imperative operations on the root player do.

use serde::{Deserialize, Serialize};

use crate::media::{BufferedRanges, MediaSnapshot, NetworkState, ReadyState};

/// UI-facing player state derived from the media element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub network_state: NetworkState,
    pub ready_state: ReadyState,
    pub paused: bool,
    pub muted: bool,
    /// Volume in `0.0..=1.0`
    pub volume: f64,
    pub playback_rate: f64,
    pub duration: f64,
    pub current_time: f64,
    pub buffered: BufferedRanges,
    /// End of the last buffered range as a percentage of duration, `0..=100`
    pub percentage_buffered: f64,
    /// Current position as a percentage of duration, `0..=100`
    pub percentage_played: f64,
    /// True when the element reports no usable source
    pub error: bool,
    /// True until the element has enough data to play through
    pub loading: bool,
    /// Keyboard/pointer focus on the player shell. Purely UI-derived,
    /// untouched by [`PlayerState::apply_snapshot`].
    pub focused: bool,
}

impl PlayerState {
    /// State before the first resynchronization pass, matching what the
    /// element will report once mounted with the given configuration
    pub fn initial(autoplay: bool, muted: bool) -> Self {
        Self {
            network_state: NetworkState::Empty,
            ready_state: ReadyState::HaveNothing,
            paused: !autoplay,
            muted,
            volume: 1.0,
            playback_rate: 1.0,
            duration: 0.0,
            current_time: 0.0,
            buffered: BufferedRanges::new(),
            percentage_buffered: 0.0,
            percentage_played: 0.0,
            error: false,
            loading: false,
            focused: false,
        }
    }

    /// Re-derive every media-backed field from a snapshot of the element.
    ///
    /// Idempotent and side-effect free: applying the same snapshot twice
    /// yields an identical state. `focused` is left alone.
    pub fn apply_snapshot(&mut self, snapshot: &MediaSnapshot) {
        self.network_state = snapshot.network_state;
        self.ready_state = snapshot.ready_state;
        self.paused = snapshot.paused;
        self.muted = snapshot.muted;
        self.volume = snapshot.volume;
        self.playback_rate = snapshot.playback_rate;
        self.duration = snapshot.duration;
        self.current_time = snapshot.current_time;
        self.buffered = snapshot.buffered.clone();

        self.percentage_buffered = snapshot
            .buffered
            .end_of_last()
            .map(|end| percentage_of(end, snapshot.duration))
            .unwrap_or(0.0);
        self.percentage_played = percentage_of(snapshot.current_time, snapshot.duration);
        self.error = snapshot.network_state == NetworkState::NoSource;
        self.loading = snapshot.ready_state < ReadyState::HaveEnoughData;
    }

    /// The mutually exclusive presentation phase, in overlay precedence
    /// order: error beats loading beats paused/playing
    pub fn phase(&self) -> PlaybackPhase {
        if self.error {
            PlaybackPhase::Error
        } else if self.loading {
            PlaybackPhase::Loading
        } else if self.paused {
            PlaybackPhase::Paused
        } else {
            PlaybackPhase::Playing
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::initial(false, false)
    }
}

/// Presentation phase of the player shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackPhase {
    Error,
    Loading,
    Paused,
    Playing,
}

impl PlaybackPhase {
    /// BEM modifier class for the player shell
    pub fn modifier_class(self) -> &'static str {
        match self {
            PlaybackPhase::Error => "video--error",
            PlaybackPhase::Loading => "video--loading",
            PlaybackPhase::Paused => "video--paused",
            PlaybackPhase::Playing => "video--playing",
        }
    }
}

/// `part / whole * 100`, or `0.0` when `whole` is not a positive finite
/// number (a freshly mounted element reports duration `0` or `NaN`)
fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole.is_finite() && whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
