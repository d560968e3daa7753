//! Media element constants, snapshots and the fixed event table
//!
//! Mirrors the parts of the HTML media element contract that the player
//! consumes: ready/network state codes, buffered time ranges and the set of
//! media events that drive state resynchronization.

use serde::{Deserialize, Serialize};

/// How much of the media the element has available, per the
/// `HTMLMediaElement.readyState` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReadyState {
    /// No information about the media resource
    HaveNothing,
    /// Metadata (duration, dimensions) is available
    HaveMetadata,
    /// Data for the current position is available
    HaveCurrentData,
    /// Data for a little beyond the current position is available
    HaveFutureData,
    /// Enough data to play through without stalling
    HaveEnoughData,
}

impl ReadyState {
    /// Convert from the raw `readyState` code
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            0 => ReadyState::HaveNothing,
            1 => ReadyState::HaveMetadata,
            2 => ReadyState::HaveCurrentData,
            3 => ReadyState::HaveFutureData,
            _ => ReadyState::HaveEnoughData,
        }
    }

    /// The raw `readyState` code
    pub fn raw(self) -> u16 {
        self as u16
    }
}

/// Fetch state of the media resource, per the
/// `HTMLMediaElement.networkState` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkState {
    /// Element has not started selecting a resource
    Empty,
    /// Resource selected but not currently loading
    Idle,
    /// Actively downloading data
    Loading,
    /// No usable source was found
    NoSource,
}

impl NetworkState {
    /// Convert from the raw `networkState` code
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            0 => NetworkState::Empty,
            1 => NetworkState::Idle,
            2 => NetworkState::Loading,
            _ => NetworkState::NoSource,
        }
    }

    /// The raw `networkState` code
    pub fn raw(self) -> u16 {
        self as u16
    }
}

/// Buffered time ranges copied out of the element's `TimeRanges` object,
/// as ordered `(start, end)` pairs in seconds
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BufferedRanges(Vec<(f64, f64)>);

impl BufferedRanges {
    /// Create an empty range set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ranges
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no data is buffered
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// End time of the last buffered range, if any. The last range is the
    /// furthest point the element has data for.
    pub fn end_of_last(&self) -> Option<f64> {
        self.0.last().map(|&(_, end)| end)
    }

    /// Iterate over `(start, end)` pairs
    pub fn iter(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.0.iter()
    }
}

impl From<Vec<(f64, f64)>> for BufferedRanges {
    fn from(ranges: Vec<(f64, f64)>) -> Self {
        Self(ranges)
    }
}

/// Plain-data capture of the media element's live properties.
///
/// The web layer builds one of these per resynchronization pass; state
/// derivation is a pure function over it, so the whole pipeline can be
/// tested without a DOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSnapshot {
    pub duration: f64,
    pub current_time: f64,
    pub buffered: BufferedRanges,
    pub paused: bool,
    pub muted: bool,
    pub volume: f64,
    pub playback_rate: f64,
    pub ready_state: ReadyState,
    pub network_state: NetworkState,
}

impl Default for MediaSnapshot {
    fn default() -> Self {
        Self {
            duration: 0.0,
            current_time: 0.0,
            buffered: BufferedRanges::new(),
            paused: true,
            muted: false,
            volume: 1.0,
            playback_rate: 1.0,
            ready_state: ReadyState::HaveNothing,
            network_state: NetworkState::Empty,
        }
    }
}

/// The media events that trigger state resynchronization.
///
/// One listener per kind is attached to the video element when the player
/// mounts; the table is fixed so the handler set is built exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaEventKind {
    Abort,
    CanPlay,
    CanPlayThrough,
    DurationChange,
    Emptied,
    Encrypted,
    Ended,
    Error,
    LoadedData,
    LoadedMetadata,
    LoadStart,
    Pause,
    Play,
    Playing,
    Progress,
    RateChange,
    Seeked,
    Seeking,
    Stalled,
    Suspend,
    TimeUpdate,
    VolumeChange,
    Waiting,
}

impl MediaEventKind {
    /// Every media event the player listens to
    pub const ALL: [MediaEventKind; 23] = [
        MediaEventKind::Abort,
        MediaEventKind::CanPlay,
        MediaEventKind::CanPlayThrough,
        MediaEventKind::DurationChange,
        MediaEventKind::Emptied,
        MediaEventKind::Encrypted,
        MediaEventKind::Ended,
        MediaEventKind::Error,
        MediaEventKind::LoadedData,
        MediaEventKind::LoadedMetadata,
        MediaEventKind::LoadStart,
        MediaEventKind::Pause,
        MediaEventKind::Play,
        MediaEventKind::Playing,
        MediaEventKind::Progress,
        MediaEventKind::RateChange,
        MediaEventKind::Seeked,
        MediaEventKind::Seeking,
        MediaEventKind::Stalled,
        MediaEventKind::Suspend,
        MediaEventKind::TimeUpdate,
        MediaEventKind::VolumeChange,
        MediaEventKind::Waiting,
    ];

    /// The DOM event name
    pub fn as_name(self) -> &'static str {
        match self {
            MediaEventKind::Abort => "abort",
            MediaEventKind::CanPlay => "canplay",
            MediaEventKind::CanPlayThrough => "canplaythrough",
            MediaEventKind::DurationChange => "durationchange",
            MediaEventKind::Emptied => "emptied",
            MediaEventKind::Encrypted => "encrypted",
            MediaEventKind::Ended => "ended",
            MediaEventKind::Error => "error",
            MediaEventKind::LoadedData => "loadeddata",
            MediaEventKind::LoadedMetadata => "loadedmetadata",
            MediaEventKind::LoadStart => "loadstart",
            MediaEventKind::Pause => "pause",
            MediaEventKind::Play => "play",
            MediaEventKind::Playing => "playing",
            MediaEventKind::Progress => "progress",
            MediaEventKind::RateChange => "ratechange",
            MediaEventKind::Seeked => "seeked",
            MediaEventKind::Seeking => "seeking",
            MediaEventKind::Stalled => "stalled",
            MediaEventKind::Suspend => "suspend",
            MediaEventKind::TimeUpdate => "timeupdate",
            MediaEventKind::VolumeChange => "volumechange",
            MediaEventKind::Waiting => "waiting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_state_codes_round_trip() {
        for raw in 0..=4 {
            assert_eq!(ReadyState::from_raw(raw).raw(), raw);
        }
        // Out-of-range codes clamp to the richest state
        assert_eq!(ReadyState::from_raw(7), ReadyState::HaveEnoughData);
    }

    #[test]
    fn test_ready_state_ordering() {
        assert!(ReadyState::HaveMetadata < ReadyState::HaveEnoughData);
        assert!(ReadyState::HaveFutureData < ReadyState::HaveEnoughData);
    }

    #[test]
    fn test_network_state_codes() {
        assert_eq!(NetworkState::from_raw(0), NetworkState::Empty);
        assert_eq!(NetworkState::from_raw(3), NetworkState::NoSource);
        assert_eq!(NetworkState::NoSource.raw(), 3);
    }

    #[test]
    fn test_buffered_ranges_end_of_last() {
        let ranges = BufferedRanges::from(vec![(0.0, 10.0), (20.0, 45.5)]);
        assert_eq!(ranges.end_of_last(), Some(45.5));
        assert_eq!(BufferedRanges::new().end_of_last(), None);
    }

    #[test]
    fn test_event_table_is_complete() {
        assert_eq!(MediaEventKind::ALL.len(), 23);
        // Names are unique and lowercase DOM names
        let mut names: Vec<_> = MediaEventKind::ALL.iter().map(|e| e.as_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 23);
        assert!(names.iter().all(|n| n.chars().all(|c| c.is_ascii_lowercase())));
    }
}
