//! Player configuration types

use serde::{Deserialize, Serialize};

use crate::labels::LabelOverrides;
use crate::throttle::DEFAULT_WINDOW_MS;

/// A media source candidate, rendered as a `<source>` child of the video
/// element. The browser picks the first one it can play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Source URL
    pub src: String,
    /// MIME type hint (e.g. `video/mp4`), if known
    pub media_type: Option<String>,
}

impl Source {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            media_type: None,
        }
    }

    pub fn with_type(src: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            media_type: Some(media_type.into()),
        }
    }
}

/// Construction-time player configuration.
///
/// Everything here is passthrough configuration for the native element or
/// static UI setup; none of it is revisited after mount. Malformed values
/// are not validated, the element's own error handling takes over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Start playback as soon as the element can
    pub autoplay: bool,
    /// Start muted
    pub muted: bool,
    /// Render the control UI at all
    pub controls: bool,
    /// Ordered source candidates
    pub sources: Vec<Source>,
    /// Label overrides merged over the defaults
    pub labels: LabelOverrides,
    /// Resynchronization window in milliseconds
    pub throttle_ms: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            muted: false,
            controls: true,
            sources: Vec::new(),
            labels: LabelOverrides::default(),
            throttle_ms: DEFAULT_WINDOW_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PlayerConfig::default();
        assert!(!config.autoplay);
        assert!(!config.muted);
        assert!(config.controls);
        assert!(config.sources.is_empty());
        assert_eq!(config.throttle_ms, 100.0);
    }

    #[test]
    fn test_source_constructors() {
        let plain = Source::new("movie.webm");
        assert_eq!(plain.media_type, None);

        let typed = Source::with_type("movie.mp4", "video/mp4");
        assert_eq!(typed.media_type.as_deref(), Some("video/mp4"));
    }

    #[test]
    fn test_config_deserializes_partially() {
        let config: PlayerConfig = serde_json::from_str(
            r#"{"autoplay": true, "sources": [{"src": "a.mp4", "media_type": "video/mp4"}]}"#,
        )
        .unwrap();
        assert!(config.autoplay);
        assert!(config.controls);
        assert_eq!(config.sources.len(), 1);
    }
}
